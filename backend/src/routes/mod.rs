//! Route definitions for the weather proxy

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes (all public)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Liveness, independent of upstream
        .route("/health", get(handlers::health_check))
        // Current conditions
        .route("/weather", get(handlers::get_current_weather))
}
