//! Health check API

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::config::env::constants::{SERVICE, VERSION};
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    timestamp: String,
    uptime_secs: i64,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(health_check))
}

/// Health check - returns status, current time and uptime
///
/// GET /api/health
/// No authentication required
async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    Json(HealthResponse {
        status: "ok",
        service: SERVICE,
        version: VERSION,
        timestamp: now.to_rfc3339(),
        uptime_secs: (now - state.started_at).num_seconds(),
    })
}
