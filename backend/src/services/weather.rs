//! Weather service for current-conditions lookups

use shared::{validate_coordinate_params, WeatherReading};

use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

/// Weather service validating lookups and delegating to upstream
#[derive(Clone)]
pub struct WeatherService {
    weather_client: WeatherClient,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(weather_client: WeatherClient) -> Self {
        Self { weather_client }
    }

    /// Current conditions at the given coordinates.
    ///
    /// Both values must be present and non-empty. They are not parsed; upstream
    /// decides what a valid coordinate is.
    pub async fn current_conditions(
        &self,
        lat: Option<&str>,
        lon: Option<&str>,
    ) -> AppResult<WeatherReading> {
        let query = validate_coordinate_params(lat, lon).map_err(AppError::InvalidRequest)?;

        self.weather_client.get_current_reading(&query).await
    }
}
