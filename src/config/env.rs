//! Environment variable configuration

use std::env;

/// Process configuration, loaded once at startup and treated as
/// immutable afterwards.
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// Upstream Dokploy base URL
    pub dokploy_url: Option<String>,
    /// Upstream Dokploy API token
    pub dokploy_token: Option<String>,
    /// Static bearer token required on /api routes; `None` means open mode
    pub viewer_token: Option<String>,
    /// Listening port
    pub port: u16,
}

impl EnvConfig {
    /// Load configuration from the process environment.
    ///
    /// Empty values count as unset. Upstream URL/token may legitimately be
    /// absent at startup; the client reports them when a call needs them.
    pub fn from_env() -> Self {
        let dokploy_url = load_non_empty("DOKPLOY_URL");
        let dokploy_token = load_non_empty("DOKPLOY_TOKEN");

        let viewer_token = load_non_empty("VIEWER_TOKEN");
        if viewer_token.is_none() {
            tracing::warn!("VIEWER_TOKEN not set, API is open to unauthenticated access");
        }

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self {
            dokploy_url,
            dokploy_token,
            viewer_token,
            port,
        }
    }
}

/// Read an environment variable, treating empty strings as unset.
fn load_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// Constants
pub mod constants {
    /// Service name reported by the health endpoint
    pub const SERVICE: &str = "dokploy-viewer";

    /// Version number
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_non_empty() {
        env::set_var("TEST_VIEWER_VALUE", "abc");
        assert_eq!(load_non_empty("TEST_VIEWER_VALUE"), Some("abc".to_string()));

        env::set_var("TEST_VIEWER_VALUE", "");
        assert_eq!(load_non_empty("TEST_VIEWER_VALUE"), None);

        env::remove_var("TEST_VIEWER_VALUE");
        assert_eq!(load_non_empty("TEST_VIEWER_VALUE"), None);
    }
}
