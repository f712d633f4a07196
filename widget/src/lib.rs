//! Client-side weather widget
//!
//! Provides:
//! - The city picker / refresh state machine with last-write-wins results
//! - Sources reading through the proxy or straight from upstream
//! - Card formatting for the current conditions
//! - WebAssembly exports for the lookup tables and payload normalization

use wasm_bindgen::prelude::*;

pub mod card;
pub mod source;
pub mod state;
pub mod widget;

pub use card::WeatherCard;
pub use source::{DirectSource, FetchError, ProxySource, WeatherSource};
pub use state::{FetchStatus, FetchTicket, WidgetState};
pub use widget::{WeatherWidget, WidgetError};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Human description of a weather code
#[wasm_bindgen]
pub fn describe_weather_code(code: i32) -> String {
    describe_condition(code).description.to_string()
}

/// Emoji icon for a weather code
#[wasm_bindgen]
pub fn weather_icon(code: i32) -> String {
    describe_condition(code).icon.to_string()
}

/// The picker's cities as a JSON array of `{id, name, lat, lon}`
#[wasm_bindgen]
pub fn cities_json() -> String {
    serde_json::to_string(&CITIES).unwrap_or_else(|_| "[]".to_string())
}

/// Normalize a raw upstream forecast body into reading JSON
#[wasm_bindgen]
pub fn normalize_forecast_json(body: &str) -> Result<String, JsValue> {
    let reading = WeatherReading::from_upstream_json(body)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&reading)
        .map_err(|e| JsValue::from_str(&format!("Failed to encode reading: {}", e)))
}
