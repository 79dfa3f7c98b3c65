use chrono::NaiveDate;

use crate::application::ports::medical_record_repository::MedicalRecordRepository;
use crate::application::ports::patient_data::PatientDataError;
use crate::domain::records::medical_record::{MedicalRecord, MedicalRecordDraft};

pub struct AddMedicalRecord<'a, R: MedicalRecordRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MedicalRecordRepository + ?Sized> AddMedicalRecord<'a, R> {
    /// Defaults are resolved here, before the record reaches storage.
    pub async fn execute(
        &self,
        email: &str,
        draft: MedicalRecordDraft,
        today: NaiveDate,
    ) -> Result<MedicalRecord, PatientDataError> {
        let record = draft.into_record(today);
        self.repo.append(email, &record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::user_repository::UserRepository;
    use crate::infrastructure::memory::InMemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    #[tokio::test]
    async fn unknown_user_leaves_store_untouched() {
        let store = InMemoryStore::new();
        let uc = AddMedicalRecord { repo: &store };
        let err = uc
            .execute("ghost@x.com", MedicalRecordDraft::default(), today())
            .await
            .unwrap_err();
        assert!(matches!(err, PatientDataError::UserNotFound));

        // Creating the user afterwards must not surface an orphan record.
        store
            .create_user("ghost@x.com", "G", "$argon2id$stub", "0")
            .await
            .unwrap();
        assert!(store.list_for("ghost@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stored_record_has_defaults_resolved() {
        let store = InMemoryStore::new();
        store
            .create_user("a@x.com", "A", "$argon2id$stub", "1")
            .await
            .unwrap();
        let rec = AddMedicalRecord { repo: &store }
            .execute(
                "a@x.com",
                MedicalRecordDraft {
                    description: Some("annual checkup".into()),
                    ..Default::default()
                },
                today(),
            )
            .await
            .unwrap();
        assert_eq!(rec.date, "2025-01-31");
        assert_eq!(rec.record_type, "General");
        assert_eq!(rec.doctor, "Unknown");
        assert_eq!(store.list_for("a@x.com").await.unwrap(), vec![rec]);
    }
}
