pub mod admissions;
pub mod appointments;
pub mod contacts;
pub mod prescriptions;
pub mod records;
pub mod users;
