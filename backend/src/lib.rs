//! Weather Proxy - Backend Server
//!
//! A stateless HTTP proxy that forwards coordinate lookups to an upstream
//! forecast API and returns a flat, normalized current-conditions reading.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::WeatherClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_client: WeatherClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let weather_client = WeatherClient::new(config.upstream.base_url.clone());
        Self {
            config: Arc::new(config),
            weather_client,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    tracing::info!(
        environment = %state.config.environment,
        upstream = %state.config.upstream.base_url,
        "Serving weather lookups"
    );

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather Proxy API"
}
