use async_trait::async_trait;

use crate::application::ports::patient_data::PatientDataError;
use crate::domain::admissions::admission::Admission;

#[async_trait]
pub trait AdmissionRepository: Send + Sync {
    async fn append_admission(
        &self,
        email: &str,
        admission: &Admission,
    ) -> Result<Admission, PatientDataError>;
    async fn list_admissions(&self, email: &str) -> Result<Vec<Admission>, PatientDataError>;
}
