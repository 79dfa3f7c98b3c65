use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::admissions::add_admission::AddAdmission;
use crate::application::use_cases::admissions::list_admissions::ListAdmissions;
use crate::bootstrap::app_context::AppContext;
use crate::domain::admissions::admission::{Admission, AdmissionDraft};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct AdmissionItem {
    pub room_number: String,
    pub admission_date: Option<String>,
    pub discharge_date: Option<String>,
    pub status: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl From<Admission> for AdmissionItem {
    fn from(a: Admission) -> Self {
        AdmissionItem {
            room_number: a.room_number,
            admission_date: a.admission_date,
            discharge_date: a.discharge_date,
            status: a.status,
            notes: a.notes,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdmissionsResponse {
    pub admissions: Vec<AdmissionItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAdmissionRequest {
    pub room_number: Option<String>,
    /// ISO 8601 date or date-time
    pub admission_date: Option<String>,
    /// ISO 8601 date or date-time
    pub discharge_date: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateAdmissionResponse {
    pub success: bool,
    pub admission: AdmissionItem,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/admissions/:email", get(list_admissions).post(add_admission))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/admissions/{email}", tag = "Admissions",
    params(("email" = String, Path, description = "Patient email")),
    responses(
        (status = 200, body = AdmissionsResponse),
        (status = 404, description = "Unknown user", body = ErrorBody)
    ))]
pub async fn list_admissions(
    State(ctx): State<AppContext>,
    Path(email): Path<String>,
) -> Result<Json<AdmissionsResponse>, ApiError> {
    let repo = ctx.admission_repo();
    let uc = ListAdmissions {
        repo: repo.as_ref(),
    };
    let admissions = uc.execute(&email).await?;
    Ok(Json(AdmissionsResponse {
        admissions: admissions.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/admissions/{email}", tag = "Admissions",
    params(("email" = String, Path, description = "Patient email")),
    request_body = CreateAdmissionRequest,
    responses(
        (status = 201, body = CreateAdmissionResponse),
        (status = 400, description = "Missing room number or status, or a malformed date", body = ErrorBody),
        (status = 404, description = "Unknown user", body = ErrorBody)
    ))]
pub async fn add_admission(
    State(ctx): State<AppContext>,
    Path(email): Path<String>,
    payload: Result<Json<CreateAdmissionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAdmissionResponse>), ApiError> {
    let Json(req) = payload?;
    let draft = AdmissionDraft {
        room_number: req.room_number,
        admission_date: req.admission_date,
        discharge_date: req.discharge_date,
        status: req.status,
        notes: req.notes,
    };
    let repo = ctx.admission_repo();
    let uc = AddAdmission {
        repo: repo.as_ref(),
    };
    let admission = uc.execute(&email, draft, Utc::now()).await?;
    tracing::debug!(room = %admission.room_number, "admission_recorded");
    Ok((
        StatusCode::CREATED,
        Json(CreateAdmissionResponse {
            success: true,
            admission: admission.into(),
        }),
    ))
}
