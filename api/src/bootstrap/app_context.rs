use std::sync::Arc;

use crate::application::ports::admission_repository::AdmissionRepository;
use crate::application::ports::medical_record_repository::MedicalRecordRepository;
use crate::application::ports::prescription_repository::PrescriptionRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::appointments::AppointmentIdGenerator;
use crate::bootstrap::config::Config;
use crate::infrastructure::memory::InMemoryStore;

/// Router state. Stores are built once at startup and shared by every handler.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    record_repo: Arc<dyn MedicalRecordRepository>,
    prescription_repo: Arc<dyn PrescriptionRepository>,
    admission_repo: Arc<dyn AdmissionRepository>,
    appointment_ids: AppointmentIdGenerator,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        record_repo: Arc<dyn MedicalRecordRepository>,
        prescription_repo: Arc<dyn PrescriptionRepository>,
        admission_repo: Arc<dyn AdmissionRepository>,
    ) -> Self {
        Self {
            user_repo,
            record_repo,
            prescription_repo,
            admission_repo,
            appointment_ids: AppointmentIdGenerator::new(),
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn record_repo(&self) -> Arc<dyn MedicalRecordRepository> {
        self.services.record_repo.clone()
    }

    pub fn prescription_repo(&self) -> Arc<dyn PrescriptionRepository> {
        self.services.prescription_repo.clone()
    }

    pub fn admission_repo(&self) -> Arc<dyn AdmissionRepository> {
        self.services.admission_repo.clone()
    }

    pub fn appointment_ids(&self) -> &AppointmentIdGenerator {
        &self.services.appointment_ids
    }
}
