//! Viewer token authentication
//!
//! Provides a `RequireViewerToken` extractor so each protected handler
//! declares the check instead of repeating header comparisons.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

/// Viewer token extractor
///
/// Use in any handler that requires the `Authorization: Bearer <token>`
/// header. The health check handler simply omits it.
///
/// # Example
///
/// ```ignore
/// async fn protected_handler(
///     _auth: RequireViewerToken,
///     State(state): State<Arc<AppState>>,
/// ) -> impl IntoResponse {
///     // handler body...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireViewerToken;

#[async_trait]
impl FromRequestParts<Arc<AppState>> for RequireViewerToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        verify_viewer_token(&parts.headers, state.viewer_token.as_deref())
    }
}

/// Compare the `Authorization` header against the configured token.
///
/// No configured token means open mode: every request passes. This is a
/// deliberate, insecure default for local use; startup logs a warning.
pub fn verify_viewer_token(
    headers: &HeaderMap,
    expected: Option<&str>,
) -> Result<RequireViewerToken, ApiError> {
    let Some(expected) = expected else {
        return Ok(RequireViewerToken);
    };

    let provided = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    match provided {
        Some(value) if value == format!("Bearer {}", expected) => Ok(RequireViewerToken),
        Some(_) => {
            tracing::warn!("Invalid viewer token provided");
            Err(ApiError::unauthorized())
        }
        None => {
            tracing::warn!("Missing Authorization header");
            Err(ApiError::unauthorized())
        }
    }
}
