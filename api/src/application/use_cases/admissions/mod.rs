pub mod add_admission;
pub mod list_admissions;
