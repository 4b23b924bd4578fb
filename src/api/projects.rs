//! Project listing API

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::middleware::RequireViewerToken;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/projects", get(list_projects))
}

/// List all projects with their nested environments and applications
///
/// GET /api/projects
/// Requires viewer token
async fn list_projects(
    _auth: RequireViewerToken,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    match state.dokploy.call("project.all", &json!({})).await {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            error!(error = %e, "project.all failed");
            Err(ApiError::internal(e.to_string()))
        }
    }
}
