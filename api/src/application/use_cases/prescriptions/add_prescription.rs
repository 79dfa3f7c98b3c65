use chrono::{DateTime, Utc};

use crate::application::ports::prescription_repository::PrescriptionRepository;
use crate::application::services::validation::present;
use crate::application::use_cases::entries::AddEntryError;
use crate::domain::prescriptions::prescription::{Prescription, PrescriptionDraft};

pub struct AddPrescription<'a, R: PrescriptionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PrescriptionRepository + ?Sized> AddPrescription<'a, R> {
    pub async fn execute(
        &self,
        email: &str,
        draft: PrescriptionDraft,
        now: DateTime<Utc>,
    ) -> Result<Prescription, AddEntryError> {
        let Some(medication_name) = present(&draft.medication_name).map(str::to_string) else {
            return Err(AddEntryError::Invalid("Medication name is required".into()));
        };
        let prescription = draft.into_prescription(medication_name, now);
        Ok(self.repo.append_prescription(email, &prescription).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::patient_data::PatientDataError;
    use crate::application::ports::user_repository::UserRepository;
    use crate::infrastructure::memory::InMemoryStore;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-02T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[tokio::test]
    async fn status_defaults_to_active() {
        let store = InMemoryStore::new();
        store.create_user("a@x.com", "A", "$argon2id$stub", "1").await.unwrap();
        let p = AddPrescription { repo: &store }
            .execute(
                "a@x.com",
                PrescriptionDraft {
                    medication_name: Some("Amoxicillin".into()),
                    dosage: Some("500mg".into()),
                    status: Some(String::new()),
                    ..Default::default()
                },
                now(),
            )
            .await
            .unwrap();
        assert_eq!(p.status, "active");
        assert_eq!(p.dosage, "500mg");
        assert_eq!(p.frequency, "");
        assert_eq!(p.notes, "");
        assert_eq!(p.created_at, now());
        assert_eq!(store.list_prescriptions("a@x.com").await.unwrap(), vec![p]);
    }

    #[tokio::test]
    async fn medication_name_is_required() {
        let store = InMemoryStore::new();
        store.create_user("a@x.com", "A", "$argon2id$stub", "1").await.unwrap();
        let err = AddPrescription { repo: &store }
            .execute("a@x.com", PrescriptionDraft::default(), now())
            .await
            .unwrap_err();
        assert!(matches!(err, AddEntryError::Invalid(_)));
        assert!(store.list_prescriptions("a@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found() {
        let store = InMemoryStore::new();
        let err = AddPrescription { repo: &store }
            .execute(
                "ghost@x.com",
                PrescriptionDraft {
                    medication_name: Some("Ibuprofen".into()),
                    ..Default::default()
                },
                now(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AddEntryError::Data(PatientDataError::UserNotFound)));
    }
}
