use crate::application::ports::admission_repository::AdmissionRepository;
use crate::application::ports::patient_data::PatientDataError;
use crate::domain::admissions::admission::Admission;

pub struct ListAdmissions<'a, R: AdmissionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AdmissionRepository + ?Sized> ListAdmissions<'a, R> {
    pub async fn execute(&self, email: &str) -> Result<Vec<Admission>, PatientDataError> {
        self.repo.list_admissions(email).await
    }
}
