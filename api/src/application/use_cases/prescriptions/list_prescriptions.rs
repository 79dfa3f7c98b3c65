use crate::application::ports::patient_data::PatientDataError;
use crate::application::ports::prescription_repository::PrescriptionRepository;
use crate::domain::prescriptions::prescription::Prescription;

pub struct ListPrescriptions<'a, R: PrescriptionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PrescriptionRepository + ?Sized> ListPrescriptions<'a, R> {
    pub async fn execute(&self, email: &str) -> Result<Vec<Prescription>, PatientDataError> {
        self.repo.list_prescriptions(email).await
    }
}
