//! Liveness endpoint.

use axum::{response::IntoResponse, Json};

/// Report that the process is serving requests.
///
/// Does not touch the database, so it stays green while the pool is down.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
