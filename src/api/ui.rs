//! Web UI

use axum::{response::Html, routing::get, Router};
use std::sync::Arc;

use crate::state::AppState;

/// The single-page client, embedded at compile time.
static INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

/// Serve the dashboard page
///
/// GET /
/// No authentication; the page itself asks for the viewer token.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
