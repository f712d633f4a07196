//! Display-ready view of a reading

use serde::Serialize;
use shared::{describe_condition, City, WeatherReading, UNKNOWN_CONDITION};

/// Shown in place of a value upstream had no data for
pub const MISSING_VALUE: &str = "--";

/// Current-conditions card, every value formatted with its unit label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCard {
    pub city: &'static str,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub description: &'static str,
    pub icon: &'static str,
    pub observed: String,
}

impl WeatherCard {
    pub fn new(city: &City, reading: &WeatherReading) -> Self {
        let condition = reading
            .code
            .map(describe_condition)
            .unwrap_or(&UNKNOWN_CONDITION);
        let units = &reading.units;

        Self {
            city: city.name,
            temperature: with_unit(reading.temperature, "", &units.temperature),
            feels_like: with_unit(reading.apparent_temperature, "", &units.temperature),
            humidity: with_unit(reading.humidity, "", &units.humidity),
            wind: with_unit(reading.wind, " ", &units.wind),
            description: condition.description,
            icon: condition.icon,
            observed: reading
                .observed_at()
                .map(|t| t.format("%b %-d, %H:%M").to_string())
                .unwrap_or_else(|| reading.time.clone()),
        }
    }
}

fn with_unit(value: Option<f64>, separator: &str, unit: &str) -> String {
    match value {
        Some(value) => format!("{}{}{}", value, separator, unit),
        None => MISSING_VALUE.to_string(),
    }
}
