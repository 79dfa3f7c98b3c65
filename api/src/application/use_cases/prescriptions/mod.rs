pub mod add_prescription;
pub mod list_prescriptions;
