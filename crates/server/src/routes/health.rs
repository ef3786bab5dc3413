use crate::state::ServerState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
pub(crate) static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "articles-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
/// Returns 200 once the data directory exists, 503 before that
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let ready = state.is_ready();
    let (status, label, data_dir) = if ready {
        (StatusCode::OK, "ready", "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready", "missing")
    };

    (
        status,
        Json(json!({
            "status": label,
            "service": "articles-server",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "uptime_seconds": uptime_seconds(),
            "components": {
                "api": "ready",
                "data_dir": data_dir,
            }
        })),
    )
}
