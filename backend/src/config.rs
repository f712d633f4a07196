//! Configuration management for the weather proxy
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with WEATHER_PROXY prefix
//! 4. Plain `PORT` and `WEATHER_API_BASE` variables, which win over everything

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::DEFAULT_UPSTREAM_BASE;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream weather API configuration
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the forecast API, without the `/v1/forecast` path
    pub base_url: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_overrides(
            std::env::var("PORT").ok(),
            std::env::var("WEATHER_API_BASE").ok(),
        )
    }

    /// Load configuration, then apply explicit port and upstream overrides
    pub fn load_with_overrides(
        port: Option<String>,
        upstream_base: Option<String>,
    ) -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WEATHER_PROXY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 4000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.base_url", DEFAULT_UPSTREAM_BASE)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WEATHER_PROXY prefix)
            .add_source(
                Environment::with_prefix("WEATHER_PROXY")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port)?
            .set_override_option("upstream.base_url", upstream_base)?
            .build()?;

        config.try_deserialize()
    }

    /// Configuration pointing at the given upstream, with default server settings
    pub fn with_upstream(base_url: impl Into<String>) -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                base_url: base_url.into(),
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE.to_string(),
        }
    }
}
