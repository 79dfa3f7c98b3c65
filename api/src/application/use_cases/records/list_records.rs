use crate::application::ports::medical_record_repository::MedicalRecordRepository;
use crate::application::ports::patient_data::PatientDataError;
use crate::domain::records::medical_record::MedicalRecord;

pub struct ListMedicalRecords<'a, R: MedicalRecordRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MedicalRecordRepository + ?Sized> ListMedicalRecords<'a, R> {
    pub async fn execute(
        &self,
        email: &str,
    ) -> Result<Vec<MedicalRecord>, PatientDataError> {
        self.repo.list_for(email).await
    }
}
