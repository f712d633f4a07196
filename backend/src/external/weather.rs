//! Weather API client for fetching current conditions
//!
//! Integrates with the Open-Meteo forecast API (or any server speaking the same
//! `/v1/forecast` contract).

use reqwest::Client;
use shared::{ForecastQuery, WeatherReading};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient against the given upstream base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch current conditions for the query coordinates
    pub async fn get_current_reading(&self, query: &ForecastQuery) -> AppResult<WeatherReading> {
        let url = ForecastQuery::endpoint(&self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&query.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let reading = WeatherReading::from_upstream_json(&body)?;

        tracing::debug!(
            latitude = query.latitude(),
            longitude = query.longitude(),
            code = ?reading.code,
            "Fetched current conditions"
        );

        Ok(reading)
    }
}
