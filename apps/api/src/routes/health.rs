use axum::Json;
use serde_json::{json, Value};

const SERVICE_NAME: &str = "career-copilot-api";

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "AI Career Copilot is running!",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": SERVICE_NAME
    }))
}
