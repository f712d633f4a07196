//! WMO weather code lookup table
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::Serialize;

/// Human description and emoji icon for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCondition {
    pub description: &'static str,
    pub icon: &'static str,
}

impl WeatherCondition {
    const fn new(description: &'static str, icon: &'static str) -> Self {
        Self { description, icon }
    }
}

/// Shown for codes missing from the table
pub const UNKNOWN_CONDITION: WeatherCondition = WeatherCondition::new("Unknown conditions", "🌡️");

const CONDITIONS: &[(i32, WeatherCondition)] = &[
    (0, WeatherCondition::new("Clear sky", "☀️")),
    (1, WeatherCondition::new("Mainly clear", "🌤️")),
    (2, WeatherCondition::new("Partly cloudy", "⛅")),
    (3, WeatherCondition::new("Overcast", "☁️")),
    (45, WeatherCondition::new("Fog", "🌫️")),
    (48, WeatherCondition::new("Depositing rime fog", "🌫️")),
    (51, WeatherCondition::new("Light drizzle", "🌦️")),
    (53, WeatherCondition::new("Moderate drizzle", "🌦️")),
    (55, WeatherCondition::new("Dense drizzle", "🌧️")),
    (56, WeatherCondition::new("Light freezing drizzle", "🌧️")),
    (57, WeatherCondition::new("Dense freezing drizzle", "🌧️")),
    (61, WeatherCondition::new("Slight rain", "🌦️")),
    (63, WeatherCondition::new("Moderate rain", "🌧️")),
    (65, WeatherCondition::new("Heavy rain", "🌧️")),
    (66, WeatherCondition::new("Light freezing rain", "🌧️")),
    (67, WeatherCondition::new("Heavy freezing rain", "🌧️")),
    (71, WeatherCondition::new("Slight snow fall", "🌨️")),
    (73, WeatherCondition::new("Moderate snow fall", "🌨️")),
    (75, WeatherCondition::new("Heavy snow fall", "❄️")),
    (77, WeatherCondition::new("Snow grains", "🌨️")),
    (80, WeatherCondition::new("Slight rain showers", "🌦️")),
    (81, WeatherCondition::new("Moderate rain showers", "🌧️")),
    (82, WeatherCondition::new("Violent rain showers", "⛈️")),
    (85, WeatherCondition::new("Slight snow showers", "🌨️")),
    (86, WeatherCondition::new("Heavy snow showers", "❄️")),
    (95, WeatherCondition::new("Thunderstorm", "⛈️")),
    (96, WeatherCondition::new("Thunderstorm with slight hail", "⛈️")),
    (99, WeatherCondition::new("Thunderstorm with heavy hail", "⛈️")),
];

/// Look up a code, `None` if it is not in the table
pub fn lookup_condition(code: i32) -> Option<&'static WeatherCondition> {
    CONDITIONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, condition)| condition)
}

/// Condition for a code, falling back to [`UNKNOWN_CONDITION`]
pub fn describe_condition(code: i32) -> &'static WeatherCondition {
    lookup_condition(code).unwrap_or(&UNKNOWN_CONDITION)
}
