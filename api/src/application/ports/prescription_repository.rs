use async_trait::async_trait;

use crate::application::ports::patient_data::PatientDataError;
use crate::domain::prescriptions::prescription::Prescription;

#[async_trait]
pub trait PrescriptionRepository: Send + Sync {
    async fn append_prescription(
        &self,
        email: &str,
        prescription: &Prescription,
    ) -> Result<Prescription, PatientDataError>;
    async fn list_prescriptions(&self, email: &str) -> Result<Vec<Prescription>, PatientDataError>;
}
