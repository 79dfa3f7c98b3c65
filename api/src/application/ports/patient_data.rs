/// Failure shared by every per-patient store (records, prescriptions,
/// admissions): each one is keyed by an owner email that must already exist.
#[derive(thiserror::Error, Debug)]
pub enum PatientDataError {
    #[error("user not found")]
    UserNotFound,
    #[error("patient data store failure")]
    Storage(#[source] anyhow::Error),
}
