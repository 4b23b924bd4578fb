//! API module
//!
//! HTTP handlers and router assembly

pub mod applications;
pub mod health;
pub mod projects;
pub mod ui;

use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the complete router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .merge(health::router())
        // Projects
        .merge(projects::router())
        // Applications
        .merge(applications::router())
        // Web UI
        .merge(ui::router())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
