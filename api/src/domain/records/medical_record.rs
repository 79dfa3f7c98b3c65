use chrono::NaiveDate;

pub const DEFAULT_RECORD_TYPE: &str = "General";
pub const DEFAULT_DOCTOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalRecord {
    /// ISO `YYYY-MM-DD`
    pub date: String,
    pub record_type: String,
    pub description: String,
    pub doctor: String,
}

/// Submitted fields before defaults are applied. Empty strings count as missing.
#[derive(Debug, Clone, Default)]
pub struct MedicalRecordDraft {
    pub date: Option<String>,
    pub record_type: Option<String>,
    pub description: Option<String>,
    pub doctor: Option<String>,
}

impl MedicalRecordDraft {
    pub fn into_record(self, today: NaiveDate) -> MedicalRecord {
        MedicalRecord {
            date: non_empty(self.date).unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            record_type: non_empty(self.record_type)
                .unwrap_or_else(|| DEFAULT_RECORD_TYPE.to_string()),
            description: non_empty(self.description).unwrap_or_default(),
            doctor: non_empty(self.doctor).unwrap_or_else(|| DEFAULT_DOCTOR.to_string()),
        }
    }
}

pub(crate) fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}
