pub mod admission_repository;
pub mod medical_record_repository;
pub mod patient_data;
pub mod prescription_repository;
pub mod user_repository;
