//! Health Check Handler
//!
//! Simple liveness endpoint for monitoring.

use axum::Json;

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
