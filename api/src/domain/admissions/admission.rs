use chrono::{DateTime, Utc};

use crate::domain::records::medical_record::non_empty;

/// A hospital stay. Dates are kept as the ISO strings the client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub room_number: String,
    pub admission_date: Option<String>,
    pub discharge_date: Option<String>,
    pub status: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct AdmissionDraft {
    pub room_number: Option<String>,
    pub admission_date: Option<String>,
    pub discharge_date: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl AdmissionDraft {
    pub fn into_admission(
        self,
        room_number: String,
        status: String,
        created_at: DateTime<Utc>,
    ) -> Admission {
        Admission {
            room_number,
            admission_date: non_empty(self.admission_date),
            discharge_date: non_empty(self.discharge_date),
            status,
            notes: non_empty(self.notes).unwrap_or_default(),
            created_at,
        }
    }
}
