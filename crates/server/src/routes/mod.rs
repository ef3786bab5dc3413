//! API route handlers
//!
//! - `health`: liveness and readiness checks
//! - `articles`: themes, recent, random, search and similar articles

pub mod articles;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Articles API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/themes",
            "/api/recent_articles",
            "/api/random_articles",
            "/api/look_for_articles",
            "/api/similar_articles",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
