//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::event_store::EventStoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid parameter: {0}")]
    Format(String),

    #[error("wrong method")]
    WrongMethod,

    #[error("Invalid event id: {0}")]
    InvalidId(i64),

    // Store errors
    #[error(transparent)]
    Store(#[from] EventStoreError),

    // Server errors (5xx)
    #[error("Failed to decode request body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AppError {
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Format(_) | AppError::WrongMethod | AppError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store(EventStoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            // Missing events are reported as 503, not 404
            AppError::Store(EventStoreError::NotFound(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!(status = %status, "Request rejected: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
