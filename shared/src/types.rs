//! Forecast query sent to the upstream weather API

use serde::{Deserialize, Serialize};

use crate::models::City;

/// Path of the forecast endpoint, relative to the upstream base
pub const FORECAST_PATH: &str = "/v1/forecast";

/// Variables requested in the `current` block
pub const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code";

/// Public upstream used when no base is configured
pub const DEFAULT_UPSTREAM_BASE: &str = "https://api.open-meteo.com";

/// Coordinates of a current-conditions lookup.
///
/// Values are kept exactly as supplied and forwarded to upstream unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastQuery {
    latitude: String,
    longitude: String,
}

impl ForecastQuery {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    pub fn for_city(city: &City) -> Self {
        Self::new(city.lat.to_string(), city.lon.to_string())
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    /// Forecast endpoint under `base_url`; a trailing slash on the base is ignored
    pub fn endpoint(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), FORECAST_PATH)
    }

    /// Query pairs for the forecast endpoint
    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("latitude", self.latitude.as_str()),
            ("longitude", self.longitude.as_str()),
            ("current", CURRENT_FIELDS),
            ("timezone", "auto"),
        ]
    }
}
