use async_trait::async_trait;

use crate::application::ports::patient_data::PatientDataError;
use crate::domain::records::medical_record::MedicalRecord;

/// Append-only record history per user email, listed in insertion order.
#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    async fn append(
        &self,
        email: &str,
        record: &MedicalRecord,
    ) -> Result<MedicalRecord, PatientDataError>;
    async fn list_for(&self, email: &str)
    -> Result<Vec<MedicalRecord>, PatientDataError>;
}
