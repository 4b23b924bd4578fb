//! Unified error handling
//!
//! Provides an `ApiError` enum implementing `IntoResponse`, replacing the
//! repeated `(StatusCode, Json<ErrorResponse>)` pattern in handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::infra::DokployError;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// 401 - missing or invalid viewer token
    Unauthorized,
    /// 500 - upstream call or local failure
    Internal(String),
    /// 500 - internal failure with extra detail for the client
    WithDetails { message: String, details: String },
}

impl ApiError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::WithDetails {
            message: message.into(),
            details: details.into(),
        }
    }
}

impl From<DokployError> for ApiError {
    fn from(e: DokployError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("unauthorized", "Invalid or missing viewer token"),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("internal_error", msg),
            ),
            ApiError::WithDetails { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("internal_error", message).with_details(details),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::Internal(m) => write!(f, "Internal error: {}", m),
            ApiError::WithDetails { message, details } => {
                write!(f, "Internal error: {} ({})", message, details)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience alias
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let resp = ErrorResponse::new("test_error", "Test message");
        assert_eq!(resp.error, "test_error");
        assert_eq!(resp.message, "Test message");
        assert!(resp.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let resp = ErrorResponse::new("test_error", "Test message").with_details("Extra info");
        assert_eq!(resp.details, Some("Extra info".to_string()));
    }
}
