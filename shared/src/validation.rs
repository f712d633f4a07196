//! Validation of incoming lookup parameters

use serde::{Deserialize, Serialize};

use crate::types::ForecastQuery;

/// Message returned when either coordinate is absent
pub const MISSING_COORDINATES: &str = "lat and lon are required query params";

/// JSON body carried by every failed proxy response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Require both coordinates to be present and non-empty.
///
/// Only presence is checked; the values themselves go to upstream as given.
pub fn validate_coordinate_params(
    lat: Option<&str>,
    lon: Option<&str>,
) -> Result<ForecastQuery, &'static str> {
    match (lat, lon) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => {
            Ok(ForecastQuery::new(lat, lon))
        }
        _ => Err(MISSING_COORDINATES),
    }
}
