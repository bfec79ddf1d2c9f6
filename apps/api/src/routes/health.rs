use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

const SERVICE_NAME: &str = "Career Compass Backend";

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// GET /test
pub async fn test_handler() -> Json<Value> {
    Json(json!({
        "message": format!("Career Compass API v{}", env!("CARGO_PKG_VERSION")),
        "endpoints": {
            "analyze": "POST /analyze",
            "aiChat": "POST /ai-chat",
            "export": "POST /export-analysis",
            "health": "GET /health"
        }
    }))
}
