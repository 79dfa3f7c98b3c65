use chrono::{DateTime, Utc};

use crate::domain::records::medical_record::non_empty;

pub const DEFAULT_PRESCRIPTION_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub status: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct PrescriptionDraft {
    pub medication_name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl PrescriptionDraft {
    /// `medication_name` is the only required field; callers check it first.
    pub fn into_prescription(self, medication_name: String, created_at: DateTime<Utc>) -> Prescription {
        Prescription {
            medication_name,
            dosage: non_empty(self.dosage).unwrap_or_default(),
            frequency: non_empty(self.frequency).unwrap_or_default(),
            duration: non_empty(self.duration).unwrap_or_default(),
            status: non_empty(self.status)
                .unwrap_or_else(|| DEFAULT_PRESCRIPTION_STATUS.to_string()),
            notes: non_empty(self.notes).unwrap_or_default(),
            created_at,
        }
    }
}
