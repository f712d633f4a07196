//! Where the widget gets its readings from
//!
//! [`ProxySource`] goes through the weather proxy; [`DirectSource`] talks to
//! the upstream forecast API and normalizes the payload client-side.

use async_trait::async_trait;
use reqwest::Client;
use shared::{ErrorBody, ForecastQuery, ReadingError, WeatherReading, DEFAULT_UPSTREAM_BASE};
use thiserror::Error;

/// Errors surfaced by a source. The display text is shown inline in the widget.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response from weather service")]
    Malformed(#[from] ReadingError),
}

#[async_trait(?Send)]
pub trait WeatherSource {
    async fn fetch(&self, query: &ForecastQuery) -> Result<WeatherReading, FetchError>;
}

/// Reads through the weather proxy's `/weather` endpoint
#[derive(Clone)]
pub struct ProxySource {
    client: Client,
    base_url: String,
}

impl ProxySource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl WeatherSource for ProxySource {
    async fn fetch(&self, query: &ForecastQuery) -> Result<WeatherReading, FetchError> {
        let url = format!("{}/weather", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[("lat", query.latitude()), ("lon", query.longitude())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The proxy always answers failures with `{error}`; fall back for anything else
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Request failed: {}", status.as_u16()),
            };
            return Err(FetchError::Rejected(message));
        }

        Ok(response.json::<WeatherReading>().await?)
    }
}

/// Calls the upstream forecast API directly
#[derive(Clone)]
pub struct DirectSource {
    client: Client,
    base_url: String,
}

impl DirectSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for DirectSource {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_BASE)
    }
}

#[async_trait(?Send)]
impl WeatherSource for DirectSource {
    async fn fetch(&self, query: &ForecastQuery) -> Result<WeatherReading, FetchError> {
        let response = self
            .client
            .get(ForecastQuery::endpoint(&self.base_url))
            .query(&query.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Rejected(format!(
                "Upstream error: {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        Ok(WeatherReading::from_upstream_json(&body)?)
    }
}
