//! HTTP handlers for weather lookups

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use shared::{WeatherReading, MISSING_COORDINATES};

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::AppState;

/// Raw query pairs, in request order. Repeated keys are kept.
type QueryPairs = Vec<(String, String)>;

/// First non-empty value for `key`
fn first_value<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

/// Fetch current weather for `lat`/`lon` from upstream
pub async fn get_current_weather(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> AppResult<Json<WeatherReading>> {
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!("Unreadable query string: {}", rejection);
        AppError::InvalidRequest(MISSING_COORDINATES)
    })?;

    let service = WeatherService::new(state.weather_client);
    let reading = service
        .current_conditions(first_value(&pairs, "lat"), first_value(&pairs, "lon"))
        .await?;
    Ok(Json(reading))
}
