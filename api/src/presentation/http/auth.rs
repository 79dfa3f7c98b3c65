use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::User;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public view of a user. The password (hash or plaintext) is never echoed.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserResponse,
}

impl From<User> for AuthResponse {
    fn from(user: User) -> Self {
        AuthResponse {
            success: true,
            user: UserResponse {
                name: user.name,
                email: user.email,
            },
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/signup", tag = "Auth", request_body = SignupRequest, responses(
    (status = 201, body = AuthResponse),
    (status = 400, description = "Missing fields, invalid email or email already registered", body = ErrorBody)
))]
pub async fn signup(
    State(ctx): State<AppContext>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Json(req) = payload?;
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        email: req.email,
        name: req.name,
        password: req.password,
        phone: req.phone,
    };
    let user = uc.execute(&dto).await?;
    tracing::info!("user_registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Stateless: no token or cookie is issued, the client keeps its own session.
#[utoipa::path(post, path = "/api/login", tag = "Auth", request_body = LoginRequest, responses(
    (status = 200, body = AuthResponse),
    (status = 400, description = "Missing fields", body = ErrorBody),
    (status = 401, description = "Invalid credentials", body = ErrorBody)
))]
pub async fn login(
    State(ctx): State<AppContext>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(req) = payload?;
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let dto = LoginDto {
        email: req.email,
        password: req.password,
    };
    let user = uc.execute(&dto).await?;
    Ok(Json(user.into()))
}
