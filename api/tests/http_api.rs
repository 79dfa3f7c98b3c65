use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use healthconnect_api::bootstrap::app_context::{AppContext, AppServices};
use healthconnect_api::bootstrap::config::Config;
use healthconnect_api::presentation::http::router;

const INDEX_HTML: &str = "<!doctype html><title>HealthCare Connect</title>";

struct TestApp {
    router: Router,
    _assets: TempDir,
}

fn app() -> TestApp {
    let assets = TempDir::new().unwrap();
    std::fs::write(assets.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(assets.path().join("app.js"), "console.log('hi');").unwrap();
    let cfg = Config::in_memory(assets.path().to_str().unwrap());
    let ctx = AppContext::new(cfg, AppServices::in_memory());
    TestApp {
        router: router(ctx),
        _assets: assets,
    }
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(router, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, bytes) = send(router, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn signup(router: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
    post_json(
        router,
        "/api/signup",
        json!({ "name": name, "email": email, "password": password, "phone": "1" }),
    )
    .await
}

#[tokio::test]
async fn signup_then_login_round_trip() {
    let app = app();
    let (status, body) = signup(&app.router, "A", "a@x.com", "p").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "success": true, "user": { "name": "A", "email": "a@x.com" } })
    );

    let (status, body) = post_json(
        &app.router,
        "/api/login",
        json!({ "email": "a@x.com", "password": "p" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"], json!({ "name": "A", "email": "a@x.com" }));
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("argon2"));
}

#[tokio::test]
async fn login_failures_look_the_same() {
    let app = app();
    signup(&app.router, "A", "a@x.com", "p").await;

    let (wrong_status, wrong_body) = post_json(
        &app.router,
        "/api/login",
        json!({ "email": "a@x.com", "password": "nope" }),
    )
    .await;
    let (unknown_status, unknown_body) = post_json(
        &app.router,
        "/api/login",
        json!({ "email": "ghost@x.com", "password": "p" }),
    )
    .await;
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["success"], json!(false));
    assert_eq!(wrong_body["message"], json!("Invalid credentials"));
}

#[tokio::test]
async fn login_without_password_is_bad_request() {
    let app = app();
    let (status, body) = post_json(&app.router, "/api/login", json!({ "email": "a@x.com" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("validation_error"));
}

#[tokio::test]
async fn signup_validation_and_conflict() {
    let app = app();
    let (status, body) = post_json(
        &app.router,
        "/api/signup",
        json!({ "name": "A", "email": "a@x.com", "password": "p" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("All fields are required"));

    let (status, body) = signup(&app.router, "A", "not-an-email", "p").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid email format"));

    signup(&app.router, "First", "a@x.com", "p").await;
    let (status, body) = signup(&app.router, "Second", "a@x.com", "q").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("conflict"));

    // the original account still logs in with its own password
    let (status, body) = post_json(
        &app.router,
        "/api/login",
        json!({ "email": "a@x.com", "password": "p" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], json!("First"));
}

#[tokio::test]
async fn chat_replies_and_rejects_bad_input() {
    let app = app();
    let (status, body) = post_json(&app.router, "/api/data", json!({ "input": "HI" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        json!("Hello! How can I assist you with your healthcare needs today?")
    );

    for bad in [json!({ "input": 123 }), json!({ "input": "" }), json!({})] {
        let (status, body) = post_json(&app.router, "/api/data", bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("validation_error"));
        assert_eq!(body["message"], json!("Invalid input"));
    }
}

#[tokio::test]
async fn medical_records_lifecycle() {
    let app = app();

    let (status, body) = get_json(&app.router, "/api/medical-records/ghost@x.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("User not found"));

    let (status, _) = post_json(
        &app.router,
        "/api/medical-records/ghost@x.com",
        json!({ "type": "Lab" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    signup(&app.router, "A", "a@x.com", "p").await;
    let (status, body) = get_json(&app.router, "/api/medical-records/a@x.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "records": [] }));

    let (status, body) = post_json(
        &app.router,
        "/api/medical-records/a@x.com",
        json!({ "date": "2023-11-02", "type": "Lab", "description": "CBC" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["record"],
        json!({ "date": "2023-11-02", "type": "Lab", "description": "CBC", "doctor": "Unknown" })
    );

    let (_, body) = post_json(&app.router, "/api/medical-records/a@x.com", json!({})).await;
    assert_eq!(body["record"]["type"], json!("General"));
    assert_eq!(body["record"]["date"].as_str().unwrap().len(), 10);

    let (_, body) = get_json(&app.router, "/api/medical-records/a@x.com").await;
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["description"], json!("CBC"));
}

#[tokio::test]
async fn prescriptions_are_scoped_to_their_patient() {
    let app = app();

    let (status, body) = get_json(&app.router, "/api/prescriptions/ghost@x.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("not_found"));

    signup(&app.router, "A", "a@x.com", "p").await;
    signup(&app.router, "B", "b@x.com", "p").await;

    let (status, body) = post_json(
        &app.router,
        "/api/prescriptions/a@x.com",
        json!({ "dosage": "10mg" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("validation_error"));

    let (status, body) = post_json(
        &app.router,
        "/api/prescriptions/a@x.com",
        json!({
            "medication_name": "Lisinopril",
            "dosage": "10mg",
            "frequency": "once daily",
            "duration": "30 days"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["prescription"]["status"], json!("active"));
    assert_eq!(body["prescription"]["notes"], json!(""));
    assert!(body["prescription"]["created_at"].is_string());

    let (_, body) = get_json(&app.router, "/api/prescriptions/a@x.com").await;
    let listed = body["prescriptions"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["medication_name"], json!("Lisinopril"));

    let (status, body) = get_json(&app.router, "/api/prescriptions/b@x.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prescriptions": [] }));
}

#[tokio::test]
async fn admissions_validate_required_fields_and_dates() {
    let app = app();
    signup(&app.router, "A", "a@x.com", "p").await;

    let (status, _) = post_json(
        &app.router,
        "/api/admissions/ghost@x.com",
        json!({ "room_number": "4", "status": "admitted" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = post_json(
        &app.router,
        "/api/admissions/a@x.com",
        json!({ "room_number": "4" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("validation_error"));

    let (status, _) = post_json(
        &app.router,
        "/api/admissions/a@x.com",
        json!({ "room_number": "4", "status": "admitted", "admission_date": "03/02/2025" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(
        &app.router,
        "/api/admissions/a@x.com",
        json!({ "room_number": "4", "status": "admitted", "admission_date": "2025-03-02T14:00:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["admission"]["admission_date"], json!("2025-03-02T14:00:00"));
    assert_eq!(body["admission"]["discharge_date"], Value::Null);

    let (status, body) = get_json(&app.router, "/api/admissions/a@x.com").await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["admissions"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["room_number"], json!("4"));
    assert_eq!(listed[0]["status"], json!("admitted"));
}

#[tokio::test]
async fn appointments_default_and_increase() {
    let app = app();
    let (status, first) = post_json(&app.router, "/api/appointments", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], json!(true));
    let a = &first["appointment"];
    assert_eq!(a["type"], json!("General"));
    assert_eq!(a["date"], json!("TBD"));
    assert_eq!(a["time"], json!("TBD"));
    assert_eq!(a["doctor"], json!("Assigned by system"));
    assert_eq!(a["status"], json!("Scheduled"));

    // no body at all still schedules
    let req = Request::builder()
        .method("POST")
        .uri("/api/appointments")
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
    let second: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(second["appointment"]["id"].as_i64() > a["id"].as_i64());
}

#[tokio::test]
async fn emergency_contacts_are_fixed() {
    let app = app();
    let (status, body) = get_json(&app.router, "/api/emergency-contacts").await;
    assert_eq!(status, StatusCode::OK);
    let contacts = body["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 5);
    assert_eq!(
        contacts[0],
        json!({ "name": "Emergency Services", "number": "911" })
    );
    assert!(contacts.iter().any(|c| c["number"] == json!("988")));
}

#[tokio::test]
async fn unmatched_routes_serve_the_entry_page() {
    let app = app();
    let req = Request::builder()
        .uri("/dashboard/records")
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), INDEX_HTML);

    let req = Request::builder().uri("/app.js").body(Body::empty()).unwrap();
    let (status, bytes) = send(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"console.log('hi');");
}

#[tokio::test]
async fn sdk_stub_is_javascript() {
    let app = app();
    let resp = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/_sdk/data_sdk.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app();
    let resp = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/emergency-contacts")
                .header(header::ORIGIN, "https://portal.example.net")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn health_reports_ok_for_memory_store() {
    let app = app();
    let (status, body) = get_json(&app.router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
