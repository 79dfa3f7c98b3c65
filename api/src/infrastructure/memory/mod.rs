//! Process-local store for development and tests. One lock guards every map
//! so a patient-data append observes the same user set it checks against.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::admission_repository::AdmissionRepository;
use crate::application::ports::medical_record_repository::MedicalRecordRepository;
use crate::application::ports::patient_data::PatientDataError;
use crate::application::ports::prescription_repository::PrescriptionRepository;
use crate::application::ports::user_repository::{UserRepository, UserRepositoryError, UserRow};
use crate::domain::admissions::admission::Admission;
use crate::domain::prescriptions::prescription::Prescription;
use crate::domain::records::medical_record::MedicalRecord;

#[derive(Default)]
struct Tables {
    users: HashMap<String, UserRow>,
    records: HashMap<String, Vec<MedicalRecord>>,
    prescriptions: HashMap<String, Vec<Prescription>>,
    admissions: HashMap<String, Vec<Admission>>,
}

fn list_owned<T: Clone>(
    users: &HashMap<String, UserRow>,
    rows: &HashMap<String, Vec<T>>,
    email: &str,
) -> Result<Vec<T>, PatientDataError> {
    if !users.contains_key(email) {
        return Err(PatientDataError::UserNotFound);
    }
    Ok(rows.get(email).cloned().unwrap_or_default())
}

fn push_owned<T: Clone>(
    users: &HashMap<String, UserRow>,
    rows: &mut HashMap<String, Vec<T>>,
    email: &str,
    row: &T,
) -> Result<T, PatientDataError> {
    if !users.contains_key(email) {
        return Err(PatientDataError::UserNotFound);
    }
    rows.entry(email.to_string()).or_default().push(row.clone());
    Ok(row.clone())
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
        phone: &str,
    ) -> Result<UserRow, UserRepositoryError> {
        let mut tables = self.inner.write().await;
        match tables.users.entry(email.to_string()) {
            Entry::Occupied(_) => Err(UserRepositoryError::AlreadyExists),
            Entry::Vacant(slot) => {
                let row = UserRow {
                    email: email.to_string(),
                    name: name.to_string(),
                    phone: phone.to_string(),
                    password_hash: password_hash.to_string(),
                };
                slot.insert(row.clone());
                Ok(row)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        Ok(self.inner.read().await.users.get(email).cloned())
    }
}

#[async_trait]
impl MedicalRecordRepository for InMemoryStore {
    async fn append(
        &self,
        email: &str,
        record: &MedicalRecord,
    ) -> Result<MedicalRecord, PatientDataError> {
        let mut guard = self.inner.write().await;
        let tables = &mut *guard;
        push_owned(&tables.users, &mut tables.records, email, record)
    }

    async fn list_for(
        &self,
        email: &str,
    ) -> Result<Vec<MedicalRecord>, PatientDataError> {
        let tables = self.inner.read().await;
        list_owned(&tables.users, &tables.records, email)
    }
}

#[async_trait]
impl PrescriptionRepository for InMemoryStore {
    async fn append_prescription(
        &self,
        email: &str,
        prescription: &Prescription,
    ) -> Result<Prescription, PatientDataError> {
        let mut guard = self.inner.write().await;
        let tables = &mut *guard;
        push_owned(&tables.users, &mut tables.prescriptions, email, prescription)
    }

    async fn list_prescriptions(&self, email: &str) -> Result<Vec<Prescription>, PatientDataError> {
        let tables = self.inner.read().await;
        list_owned(&tables.users, &tables.prescriptions, email)
    }
}

#[async_trait]
impl AdmissionRepository for InMemoryStore {
    async fn append_admission(
        &self,
        email: &str,
        admission: &Admission,
    ) -> Result<Admission, PatientDataError> {
        let mut guard = self.inner.write().await;
        let tables = &mut *guard;
        push_owned(&tables.users, &mut tables.admissions, email, admission)
    }

    async fn list_admissions(&self, email: &str) -> Result<Vec<Admission>, PatientDataError> {
        let tables = self.inner.read().await;
        list_owned(&tables.users, &tables.admissions, email)
    }
}
