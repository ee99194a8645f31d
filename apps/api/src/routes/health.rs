use axum::Json;
use serde_json::{json, Value};

/// GET / and GET /health
/// Returns a static status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "Code-Mentor AI API está no ar!",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "code-mentor-api"
    }))
}
