use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::records::add_record::AddMedicalRecord;
use crate::application::use_cases::records::list_records::ListMedicalRecords;
use crate::bootstrap::app_context::AppContext;
use crate::domain::records::medical_record::{MedicalRecord, MedicalRecordDraft};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct MedicalRecordItem {
    pub date: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub description: String,
    pub doctor: String,
}

impl From<MedicalRecord> for MedicalRecordItem {
    fn from(r: MedicalRecord) -> Self {
        MedicalRecordItem {
            date: r.date,
            record_type: r.record_type,
            description: r.description,
            doctor: r.doctor,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MedicalRecordsResponse {
    pub records: Vec<MedicalRecordItem>,
}

/// Every field is optional; omitted or empty ones take their defaults.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateMedicalRecordRequest {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub description: Option<String>,
    pub doctor: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateMedicalRecordResponse {
    pub success: bool,
    pub record: MedicalRecordItem,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/medical-records/:email",
            get(list_medical_records).post(add_medical_record),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/medical-records/{email}", tag = "Medical Records",
    params(("email" = String, Path, description = "Owner email")),
    responses(
        (status = 200, body = MedicalRecordsResponse),
        (status = 404, description = "Unknown user", body = ErrorBody)
    ))]
pub async fn list_medical_records(
    State(ctx): State<AppContext>,
    Path(email): Path<String>,
) -> Result<Json<MedicalRecordsResponse>, ApiError> {
    let repo = ctx.record_repo();
    let uc = ListMedicalRecords {
        repo: repo.as_ref(),
    };
    let records = uc.execute(&email).await?;
    Ok(Json(MedicalRecordsResponse {
        records: records.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/medical-records/{email}", tag = "Medical Records",
    params(("email" = String, Path, description = "Owner email")),
    request_body = CreateMedicalRecordRequest,
    responses(
        (status = 200, body = CreateMedicalRecordResponse),
        (status = 404, description = "Unknown user", body = ErrorBody)
    ))]
pub async fn add_medical_record(
    State(ctx): State<AppContext>,
    Path(email): Path<String>,
    payload: Option<Json<CreateMedicalRecordRequest>>,
) -> Result<Json<CreateMedicalRecordResponse>, ApiError> {
    let req = payload.map(|Json(v)| v).unwrap_or_default();
    let draft = MedicalRecordDraft {
        date: req.date,
        record_type: req.record_type,
        description: req.description,
        doctor: req.doctor,
    };
    let repo = ctx.record_repo();
    let uc = AddMedicalRecord {
        repo: repo.as_ref(),
    };
    let today = chrono::Utc::now().date_naive();
    let record = uc.execute(&email, draft, today).await?;
    Ok(Json(CreateMedicalRecordResponse {
        success: true,
        record: record.into(),
    }))
}
