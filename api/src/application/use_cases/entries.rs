//! Shared failure type for creating per-patient entries that have required
//! fields (prescriptions, admissions).

use crate::application::ports::patient_data::PatientDataError;

#[derive(thiserror::Error, Debug)]
pub enum AddEntryError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Data(#[from] PatientDataError),
}
