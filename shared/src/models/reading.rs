//! Current-conditions reading and the upstream forecast payload it is built from

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A normalized current-conditions snapshot for one location.
///
/// Upstream reports `null` for variables it has no data for; those stay `None`
/// and serialize back to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind: Option<f64>,
    pub code: Option<i32>,
    /// Local time at the location, verbatim from upstream
    pub time: String,
    pub units: ReadingUnits,
}

/// Unit labels echoed from upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingUnits {
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
}

/// Open-Meteo forecast response, restricted to the `current` block
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamForecast {
    pub current: UpstreamCurrent,
    pub current_units: UpstreamUnits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCurrent {
    pub time: String,
    pub temperature_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub weather_code: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamUnits {
    pub temperature_2m: String,
    pub relative_humidity_2m: String,
    pub wind_speed_10m: String,
}

/// Errors raised while reading an upstream payload
#[derive(Error, Debug)]
pub enum ReadingError {
    #[error("Malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<UpstreamForecast> for WeatherReading {
    fn from(forecast: UpstreamForecast) -> Self {
        let UpstreamForecast {
            current,
            current_units,
        } = forecast;

        Self {
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            humidity: current.relative_humidity_2m,
            wind: current.wind_speed_10m,
            code: current.weather_code,
            time: current.time,
            units: ReadingUnits {
                temperature: current_units.temperature_2m,
                humidity: current_units.relative_humidity_2m,
                wind: current_units.wind_speed_10m,
            },
        }
    }
}

impl WeatherReading {
    /// Parse a raw upstream forecast body and normalize it
    pub fn from_upstream_json(body: &str) -> Result<Self, ReadingError> {
        let forecast: UpstreamForecast = serde_json::from_str(body)?;
        Ok(forecast.into())
    }

    /// Observation time as a local timestamp.
    ///
    /// Upstream reports minutes precision (`2024-06-01T14:15`); seconds are
    /// accepted too. Returns `None` for anything else.
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.time, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(&self.time, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }
}
