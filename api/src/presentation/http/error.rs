use std::any::Any;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::ports::patient_data::PatientDataError;
use crate::application::services::responder::InvalidInput;
use crate::application::use_cases::auth::login::LoginError;
use crate::application::use_cases::auth::register::RegisterError;
use crate::application::use_cases::entries::AddEntryError;

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const USER_NOT_FOUND: &str = "User not found";

/// Every failure a handler can report. Only `Internal` hides its message from
/// the client; its cause is logged instead.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub status: &'static str,
    /// One of `validation_error`, `not_found`, `conflict`, `unauthorized`, `internal_error`
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            // Duplicate signups are reported as a bad request, not 409
            ApiError::Conflict(_) => (StatusCode::BAD_REQUEST, "conflict"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = ?err, "request_failed");
        }
        let (status, kind) = self.status_and_kind();
        let body = ErrorBody {
            success: false,
            status: "error",
            error: kind,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "json_body_rejected");
        ApiError::Validation("Invalid request body".into())
    }
}

impl From<InvalidInput> for ApiError {
    fn from(e: InvalidInput) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<RegisterError> for ApiError {
    fn from(e: RegisterError) -> Self {
        match e {
            RegisterError::MissingFields | RegisterError::InvalidEmail => {
                ApiError::Validation(e.to_string())
            }
            RegisterError::AlreadyExists => ApiError::Conflict(e.to_string()),
            RegisterError::Internal(err) => ApiError::Internal(err),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(e: LoginError) -> Self {
        match e {
            LoginError::MissingFields => ApiError::Validation(e.to_string()),
            // Same answer for both so callers cannot tell which emails exist.
            LoginError::NotFound | LoginError::InvalidPassword => {
                tracing::debug!(reason = %e, "login_rejected");
                ApiError::Unauthorized(INVALID_CREDENTIALS.into())
            }
            LoginError::Internal(err) => ApiError::Internal(err),
        }
    }
}

impl From<PatientDataError> for ApiError {
    fn from(e: PatientDataError) -> Self {
        match e {
            PatientDataError::UserNotFound => ApiError::NotFound(USER_NOT_FOUND.into()),
            PatientDataError::Storage(err) => ApiError::Internal(err),
        }
    }
}

impl From<AddEntryError> for ApiError {
    fn from(e: AddEntryError) -> Self {
        match e {
            AddEntryError::Invalid(msg) => ApiError::Validation(msg),
            AddEntryError::Data(err) => err.into(),
        }
    }
}

/// Used by `CatchPanicLayer` so a panicking handler still answers with the
/// generic JSON 500.
pub fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal(anyhow::anyhow!("handler panicked")).into_response()
}
