//! Weather Proxy - server entry point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_proxy::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Weather Proxy");

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;

    // Create application state
    let state = AppState::new(config);
    let app = create_app(state);

    tracing::info!("Weather API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
