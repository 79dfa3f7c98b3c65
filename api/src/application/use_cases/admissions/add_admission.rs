use chrono::{DateTime, Utc};

use crate::application::ports::admission_repository::AdmissionRepository;
use crate::application::services::validation::{is_iso_datetime, present};
use crate::application::use_cases::entries::AddEntryError;
use crate::domain::admissions::admission::{Admission, AdmissionDraft};

pub struct AddAdmission<'a, R: AdmissionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AdmissionRepository + ?Sized> AddAdmission<'a, R> {
    pub async fn execute(
        &self,
        email: &str,
        draft: AdmissionDraft,
        now: DateTime<Utc>,
    ) -> Result<Admission, AddEntryError> {
        let (Some(room_number), Some(status)) = (
            present(&draft.room_number).map(str::to_string),
            present(&draft.status).map(str::to_string),
        ) else {
            return Err(AddEntryError::Invalid(
                "Room number and status are required".into(),
            ));
        };
        for date in [&draft.admission_date, &draft.discharge_date] {
            if present(date).is_some_and(|d| !is_iso_datetime(d)) {
                return Err(AddEntryError::Invalid(
                    "Dates must be ISO 8601 (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)".into(),
                ));
            }
        }
        let admission = draft.into_admission(room_number, status, now);
        Ok(self.repo.append_admission(email, &admission).await?)
    }
}
