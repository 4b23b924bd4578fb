//! Deployment records from `deployment.all`

use serde::Deserialize;

/// The subset of a deployment record the logs endpoint needs.
///
/// Every field is optional; upstream omits `logPath` for deployments whose
/// logs were never written to disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deployment {
    pub deployment_id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub log_path: Option<String>,
}

impl Deployment {
    /// Human-readable stand-in when no log file exists.
    pub fn summary(&self) -> &str {
        self.description
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("No log content available")
    }
}
