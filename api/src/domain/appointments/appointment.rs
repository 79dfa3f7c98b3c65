use crate::domain::records::medical_record::non_empty;

pub const STATUS_SCHEDULED: &str = "Scheduled";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: i64,
    pub appointment_type: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub status: String,
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentDraft {
    pub appointment_type: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub doctor: Option<String>,
}

impl AppointmentDraft {
    pub fn schedule(self, id: i64) -> Appointment {
        Appointment {
            id,
            appointment_type: non_empty(self.appointment_type)
                .unwrap_or_else(|| "General".to_string()),
            date: non_empty(self.date).unwrap_or_else(|| "TBD".to_string()),
            time: non_empty(self.time).unwrap_or_else(|| "TBD".to_string()),
            doctor: non_empty(self.doctor).unwrap_or_else(|| "Assigned by system".to_string()),
            status: STATUS_SCHEDULED.to_string(),
        }
    }
}
