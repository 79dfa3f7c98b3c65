use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::contacts::emergency::EMERGENCY_CONTACTS;

#[derive(Debug, Serialize, ToSchema)]
pub struct EmergencyContactItem {
    pub name: String,
    pub number: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmergencyContactsResponse {
    pub contacts: Vec<EmergencyContactItem>,
}

#[utoipa::path(get, path = "/api/emergency-contacts", tag = "Support",
    responses((status = 200, body = EmergencyContactsResponse)))]
pub async fn list_emergency_contacts() -> Json<EmergencyContactsResponse> {
    let contacts = EMERGENCY_CONTACTS
        .iter()
        .map(|c| EmergencyContactItem {
            name: c.name.to_string(),
            number: c.number.to_string(),
        })
        .collect();
    Json(EmergencyContactsResponse { contacts })
}

pub fn routes() -> Router {
    Router::new().route("/emergency-contacts", get(list_emergency_contacts))
}
