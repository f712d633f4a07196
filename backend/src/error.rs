//! Error handling for the weather proxy
//!
//! Every failure reaches the caller as a flat `{"error": "..."}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorBody, ReadingError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller omitted a required parameter
    #[error("Invalid request: {0}")]
    InvalidRequest(&'static str),

    /// Upstream answered with a non-success status
    #[error("Upstream error: {status}")]
    Upstream { status: u16 },

    /// Upstream could not be reached or the body could not be read
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream body was not a forecast payload
    #[error("Upstream payload rejected: {0}")]
    Malformed(#[from] ReadingError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Transport(_) | AppError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the caller; internal detail is never included
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidRequest(message) => message.to_string(),
            AppError::Upstream { status } => format!("Upstream error: {}", status),
            AppError::Transport(_) | AppError::Malformed(_) => "Server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidRequest(_) => tracing::debug!("Rejected request: {}", self),
            AppError::Upstream { status } => tracing::warn!(status, "Upstream returned an error"),
            AppError::Transport(_) | AppError::Malformed(_) => {
                tracing::error!("Error fetching weather: {:?}", self)
            }
        }

        let body = ErrorBody::new(self.public_message());
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
