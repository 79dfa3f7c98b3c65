use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::prescriptions::add_prescription::AddPrescription;
use crate::application::use_cases::prescriptions::list_prescriptions::ListPrescriptions;
use crate::bootstrap::app_context::AppContext;
use crate::domain::prescriptions::prescription::{Prescription, PrescriptionDraft};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct PrescriptionItem {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub status: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl From<Prescription> for PrescriptionItem {
    fn from(p: Prescription) -> Self {
        PrescriptionItem {
            medication_name: p.medication_name,
            dosage: p.dosage,
            frequency: p.frequency,
            duration: p.duration,
            status: p.status,
            notes: p.notes,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrescriptionsResponse {
    pub prescriptions: Vec<PrescriptionItem>,
}

/// `medication_name` is required; `status` defaults to `active`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePrescriptionRequest {
    pub medication_name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePrescriptionResponse {
    pub success: bool,
    pub prescription: PrescriptionItem,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/prescriptions/:email",
            get(list_prescriptions).post(add_prescription),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/prescriptions/{email}", tag = "Prescriptions",
    params(("email" = String, Path, description = "Patient email")),
    responses(
        (status = 200, body = PrescriptionsResponse),
        (status = 404, description = "Unknown user", body = ErrorBody)
    ))]
pub async fn list_prescriptions(
    State(ctx): State<AppContext>,
    Path(email): Path<String>,
) -> Result<Json<PrescriptionsResponse>, ApiError> {
    let repo = ctx.prescription_repo();
    let uc = ListPrescriptions {
        repo: repo.as_ref(),
    };
    let prescriptions = uc.execute(&email).await?;
    Ok(Json(PrescriptionsResponse {
        prescriptions: prescriptions.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/prescriptions/{email}", tag = "Prescriptions",
    params(("email" = String, Path, description = "Patient email")),
    request_body = CreatePrescriptionRequest,
    responses(
        (status = 201, body = CreatePrescriptionResponse),
        (status = 400, description = "Missing medication name", body = ErrorBody),
        (status = 404, description = "Unknown user", body = ErrorBody)
    ))]
pub async fn add_prescription(
    State(ctx): State<AppContext>,
    Path(email): Path<String>,
    payload: Result<Json<CreatePrescriptionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatePrescriptionResponse>), ApiError> {
    let Json(req) = payload?;
    let draft = PrescriptionDraft {
        medication_name: req.medication_name,
        dosage: req.dosage,
        frequency: req.frequency,
        duration: req.duration,
        status: req.status,
        notes: req.notes,
    };
    let repo = ctx.prescription_repo();
    let uc = AddPrescription {
        repo: repo.as_ref(),
    };
    let prescription = uc.execute(&email, draft, Utc::now()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatePrescriptionResponse {
            success: true,
            prescription: prescription.into(),
        }),
    ))
}
