use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::app_context::AppContext;

pub mod admissions;
pub mod appointments;
pub mod auth;
pub mod chat;
pub mod emergency;
pub mod error;
pub mod health;
pub mod medical_records;
pub mod prescriptions;
pub mod sdk;
pub mod spa;

/// Any origin may call the API; no credentials are involved.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Full HTTP surface: JSON API under `/api`, SDK stubs, and the SPA fallback
/// for everything else.
pub fn router(ctx: AppContext) -> Router {
    let assets = spa::service(&ctx.cfg.static_dir);
    Router::new()
        .nest("/api", health::routes(ctx.clone()))
        .nest("/api", chat::routes())
        .nest("/api", auth::routes(ctx.clone()))
        .nest("/api", medical_records::routes(ctx.clone()))
        .nest("/api", prescriptions::routes(ctx.clone()))
        .nest("/api", admissions::routes(ctx.clone()))
        .nest("/api", appointments::routes(ctx.clone()))
        .nest("/api", emergency::routes())
        .merge(sdk::routes())
        .fallback_service(assets)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors())
}
