//! Application state

use chrono::{DateTime, Utc};

use crate::config::EnvConfig;
use crate::infra::DokployClient;

/// Shared state for all request handlers.
///
/// Everything here is read-only after startup; handlers never mutate
/// shared data.
pub struct AppState {
    /// Viewer bearer token; `None` means open mode
    pub viewer_token: Option<String>,
    /// Upstream Dokploy client
    pub dokploy: DokployClient,
    /// Service start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn from_config(config: EnvConfig) -> Self {
        tracing::info!(
            port = config.port,
            upstream_configured = config.dokploy_url.is_some(),
            auth_enabled = config.viewer_token.is_some(),
            "Loaded configuration"
        );

        let dokploy = DokployClient::new(config.dokploy_url, config.dokploy_token);

        Self {
            viewer_token: config.viewer_token,
            dokploy,
            started_at: Utc::now(),
        }
    }
}
