use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::services::responder::{self, InvalidInput};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub input: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

pub fn routes() -> Router {
    Router::new().route("/data", post(submit_message))
}

#[utoipa::path(post, path = "/api/data", tag = "Chat", request_body = ChatRequest, responses(
    (status = 200, body = ChatResponse),
    (status = 400, description = "Input missing or not a string", body = ErrorBody)
))]
pub async fn submit_message(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    // An unparseable body is the same caller error as a missing `input`.
    let Json(body) = payload.map_err(|_| InvalidInput)?;
    let response = responder::respond_to(&body)?;
    Ok(Json(ChatResponse { response }))
}
