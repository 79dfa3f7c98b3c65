use crate::application::services::appointments::AppointmentIdGenerator;
use crate::domain::appointments::appointment::{Appointment, AppointmentDraft};

/// Appointments are confirmed but not persisted anywhere.
pub struct ScheduleAppointment<'a> {
    pub ids: &'a AppointmentIdGenerator,
}

impl<'a> ScheduleAppointment<'a> {
    pub fn execute(&self, draft: AppointmentDraft) -> Appointment {
        draft.schedule(self.ids.next_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_increasing_ids() {
        let ids = AppointmentIdGenerator::new();
        let uc = ScheduleAppointment { ids: &ids };
        let first = uc.execute(AppointmentDraft::default());
        assert_eq!(first.appointment_type, "General");
        assert_eq!(first.date, "TBD");
        assert_eq!(first.time, "TBD");
        assert_eq!(first.doctor, "Assigned by system");
        assert_eq!(first.status, "Scheduled");

        let second = uc.execute(AppointmentDraft {
            appointment_type: Some("Dental".into()),
            time: Some("10:30".into()),
            ..Default::default()
        });
        assert!(second.id > first.id);
        assert_eq!(second.appointment_type, "Dental");
        assert_eq!(second.time, "10:30");
    }
}
