pub mod admissions;
pub mod appointments;
pub mod auth;
pub mod entries;
pub mod prescriptions;
pub mod records;
