use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use healthconnect_api::bootstrap::app_context::{AppContext, AppServices};
use healthconnect_api::bootstrap::config::{Config, StoreBackend};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            healthconnect_api::presentation::http::chat::submit_message,
            healthconnect_api::presentation::http::auth::signup,
            healthconnect_api::presentation::http::auth::login,
            healthconnect_api::presentation::http::medical_records::list_medical_records,
            healthconnect_api::presentation::http::medical_records::add_medical_record,
            healthconnect_api::presentation::http::prescriptions::list_prescriptions,
            healthconnect_api::presentation::http::prescriptions::add_prescription,
            healthconnect_api::presentation::http::admissions::list_admissions,
            healthconnect_api::presentation::http::admissions::add_admission,
            healthconnect_api::presentation::http::appointments::schedule_appointment,
            healthconnect_api::presentation::http::emergency::list_emergency_contacts,
            healthconnect_api::presentation::http::health::health,
        ),
        components(schemas(
            healthconnect_api::presentation::http::error::ErrorBody,
            healthconnect_api::presentation::http::chat::ChatRequest,
            healthconnect_api::presentation::http::chat::ChatResponse,
            healthconnect_api::presentation::http::auth::SignupRequest,
            healthconnect_api::presentation::http::auth::LoginRequest,
            healthconnect_api::presentation::http::auth::UserResponse,
            healthconnect_api::presentation::http::auth::AuthResponse,
            healthconnect_api::presentation::http::medical_records::MedicalRecordItem,
            healthconnect_api::presentation::http::medical_records::MedicalRecordsResponse,
            healthconnect_api::presentation::http::medical_records::CreateMedicalRecordRequest,
            healthconnect_api::presentation::http::medical_records::CreateMedicalRecordResponse,
            healthconnect_api::presentation::http::prescriptions::PrescriptionItem,
            healthconnect_api::presentation::http::prescriptions::PrescriptionsResponse,
            healthconnect_api::presentation::http::prescriptions::CreatePrescriptionRequest,
            healthconnect_api::presentation::http::prescriptions::CreatePrescriptionResponse,
            healthconnect_api::presentation::http::admissions::AdmissionItem,
            healthconnect_api::presentation::http::admissions::AdmissionsResponse,
            healthconnect_api::presentation::http::admissions::CreateAdmissionRequest,
            healthconnect_api::presentation::http::admissions::CreateAdmissionResponse,
            healthconnect_api::presentation::http::appointments::AppointmentRequest,
            healthconnect_api::presentation::http::appointments::AppointmentItem,
            healthconnect_api::presentation::http::appointments::AppointmentResponse,
            healthconnect_api::presentation::http::emergency::EmergencyContactItem,
            healthconnect_api::presentation::http::emergency::EmergencyContactsResponse,
            healthconnect_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Chat", description = "Keyword chat assistant"),
            (name = "Auth", description = "Signup and stateless login"),
            (name = "Medical Records", description = "Per-user medical history"),
            (name = "Prescriptions", description = "Per-user medication orders"),
            (name = "Admissions", description = "Per-user hospital stays"),
            (name = "Appointments", description = "Appointment scheduling"),
            (name = "Support", description = "Emergency contacts"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            "healthconnect_api=debug,axum=info,tower_http=info".into()
        }))
        .init();

    let cfg = Config::from_env()?;
    info!(
        port = cfg.api_port,
        backend = ?cfg.store_backend,
        static_dir = %cfg.static_dir,
        production = cfg.is_production,
        "Starting HealthCare Connect backend"
    );

    let services = match cfg.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("memory_store_enabled_data_is_not_persisted");
            AppServices::in_memory()
        }
        StoreBackend::Postgres => {
            let url = cfg
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for postgres"))?;
            let pool = healthconnect_api::infrastructure::db::connect_pool(url).await?;
            healthconnect_api::infrastructure::db::migrate(&pool).await?;
            let users = Arc::new(
                healthconnect_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
                    pool.clone(),
                ),
            );
            let records = Arc::new(
                healthconnect_api::infrastructure::db::repositories::medical_record_repository_sqlx::SqlxMedicalRecordRepository::new(
                    pool.clone(),
                ),
            );
            let prescriptions = Arc::new(
                healthconnect_api::infrastructure::db::repositories::prescription_repository_sqlx::SqlxPrescriptionRepository::new(
                    pool.clone(),
                ),
            );
            let admissions = Arc::new(
                healthconnect_api::infrastructure::db::repositories::admission_repository_sqlx::SqlxAdmissionRepository::new(
                    pool,
                ),
            );
            AppServices::new(users, records, prescriptions, admissions)
        }
    };

    if tokio::fs::metadata(&cfg.static_dir).await.is_err() {
        tracing::warn!(dir = %cfg.static_dir, "static_dir_missing_spa_routes_will_404");
    }

    let ctx = AppContext::new(cfg.clone(), services);

    let app = healthconnect_api::presentation::http::router(ctx)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "ctrl_c_listener_failed");
    }
}
