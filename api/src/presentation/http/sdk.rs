//! No-op analytics/element SDK scripts the bundled front-end loads. They only
//! exist so the page does not 404 on its script tags.

use axum::{Router, http::header, response::IntoResponse, routing::get};

const DATA_SDK_JS: &str = r#"
window.dataSdk = {
    init: function (config) { console.log('Data SDK initialized', config); },
    track: function (event) { console.log('Event tracked:', event); }
};
"#;

const ELEMENT_SDK_JS: &str = r#"
window.elementSdk = {
    init: function (config) {
        console.log('Element SDK initialized', config);
        if (config.onConfigChange) {
            config.onConfigChange(config.defaultConfig);
        }
    }
};
"#;

fn javascript(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], body)
}

pub async fn data_sdk() -> impl IntoResponse {
    javascript(DATA_SDK_JS)
}

pub async fn element_sdk() -> impl IntoResponse {
    javascript(ELEMENT_SDK_JS)
}

pub fn routes() -> Router {
    Router::new()
        .route("/_sdk/data_sdk.js", get(data_sdk))
        .route("/_sdk/element_sdk.js", get(element_sdk))
}
