use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::appointments::schedule::ScheduleAppointment;
use crate::bootstrap::app_context::AppContext;
use crate::domain::appointments::appointment::{Appointment, AppointmentDraft};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AppointmentRequest {
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub doctor: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub status: String,
}

impl From<Appointment> for AppointmentItem {
    fn from(a: Appointment) -> Self {
        AppointmentItem {
            id: a.id,
            appointment_type: a.appointment_type,
            date: a.date,
            time: a.time,
            doctor: a.doctor,
            status: a.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentResponse {
    pub success: bool,
    pub appointment: AppointmentItem,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/appointments", post(schedule_appointment))
        .with_state(ctx)
}

/// Never fails: a missing or unreadable body schedules with all defaults.
#[utoipa::path(post, path = "/api/appointments", tag = "Appointments",
    request_body = AppointmentRequest,
    responses((status = 200, body = AppointmentResponse)))]
pub async fn schedule_appointment(
    State(ctx): State<AppContext>,
    payload: Option<Json<AppointmentRequest>>,
) -> Json<AppointmentResponse> {
    let req = payload.map(|Json(v)| v).unwrap_or_default();
    let uc = ScheduleAppointment {
        ids: ctx.appointment_ids(),
    };
    let appointment = uc.execute(AppointmentDraft {
        appointment_type: req.appointment_type,
        date: req.date,
        time: req.time,
        doctor: req.doctor,
    });
    Json(AppointmentResponse {
        success: true,
        appointment: appointment.into(),
    })
}
