//! Health check handlers

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness check; does not contact upstream
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
