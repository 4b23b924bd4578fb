//! Application detail, deployment and log APIs

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::domain::{collect_applications, Deployment};
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequireViewerToken;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/applications", get(list_applications))
        .route("/api/applications/:id", get(get_application))
        .route("/api/applications/:id/deployments", get(list_deployments))
        .route("/api/applications/:id/logs", get(get_deployment_logs))
        .route("/api/applications/:id/env", get(get_application_env))
}

/// List all applications across every project
///
/// GET /api/applications
/// Requires viewer token
async fn list_applications(
    _auth: RequireViewerToken,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    let projects = state.dokploy.call("project.all", &json!({})).await?;
    Ok(Json(Value::Array(collect_applications(&projects))))
}

/// Fetch one application's raw detail record
///
/// GET /api/applications/:id
/// Requires viewer token
async fn get_application(
    _auth: RequireViewerToken,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let data = state
        .dokploy
        .call("application.one", &json!({ "applicationId": id }))
        .await?;
    Ok(Json(data))
}

/// List an application's deployment history
///
/// GET /api/applications/:id/deployments
/// Requires viewer token
async fn list_deployments(
    _auth: RequireViewerToken,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let data = state
        .dokploy
        .call("deployment.all", &json!({ "applicationId": id }))
        .await?;
    Ok(Json(data))
}

/// Logs from the most recent deployment
///
/// GET /api/applications/:id/logs
/// Requires viewer token
///
/// Dokploy reports the log file's path on its own host, so the content is
/// only readable when this service shares a filesystem (or volume) with the
/// Dokploy server. The read is best effort: failures become a placeholder.
async fn get_deployment_logs(
    _auth: RequireViewerToken,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let deployments = state
        .dokploy
        .call("deployment.all", &json!({ "applicationId": id }))
        .await
        .map_err(|e| ApiError::with_details("Could not fetch logs", e.to_string()))?;

    let list: Vec<Deployment> = serde_json::from_value(deployments).unwrap_or_default();
    Ok(Json(logs_body(list).await))
}

/// Build the logs response from a deployment list, newest first.
///
/// No deployments yields a placeholder body; otherwise the most recent
/// deployment decides whether file content or its own summary is returned.
async fn logs_body(list: Vec<Deployment>) -> Value {
    let Some(latest) = list.into_iter().next() else {
        return json!({ "logs": "No deployments found" });
    };

    let content = match &latest.log_path {
        Some(path) => Some(read_log_file(path).await),
        None => None,
    };

    log_response(&latest, content)
}

/// An application's environment variables
///
/// GET /api/applications/:id/env
/// Requires viewer token
async fn get_application_env(
    _auth: RequireViewerToken,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let data = state
        .dokploy
        .call("application.one", &json!({ "applicationId": id }))
        .await?;
    let env = data.get("env").cloned().unwrap_or(Value::Null);
    Ok(Json(json!({ "env": env })))
}

/// Read a deployment log from the local filesystem, substituting a
/// placeholder when the path is missing or unreadable.
async fn read_log_file(path: &str) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path, error = %e, "Failed to read deployment log file");
            "Log file not available".to_string()
        }
    }
}

/// Build the logs response body.
///
/// With file content, the body carries the log text; without a log file,
/// the deployment's status and description stand in for it.
fn log_response(latest: &Deployment, content: Option<String>) -> Value {
    match content {
        Some(logs) => json!({
            "deploymentId": latest.deployment_id,
            "status": latest.status,
            "createdAt": latest.created_at,
            "logs": logs,
        }),
        None => json!({
            "deploymentId": latest.deployment_id,
            "status": latest.status,
            "description": latest.summary(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_response_with_content() {
        let latest = Deployment {
            deployment_id: Some("d1".into()),
            status: Some("done".into()),
            created_at: Some("2026-01-01T00:00:00Z".into()),
            log_path: Some("/var/log/d1.log".into()),
            ..Default::default()
        };
        let body = log_response(&latest, Some("line one\nline two".into()));
        assert_eq!(body["logs"], "line one\nline two");
        assert_eq!(body["status"], "done");
        assert!(body.get("description").is_none());
    }

    #[test]
    fn test_log_response_without_log_file() {
        let latest = Deployment {
            deployment_id: Some("d2".into()),
            status: Some("error".into()),
            description: Some("build failed".into()),
            ..Default::default()
        };
        let body = log_response(&latest, None);
        assert_eq!(body["status"], "error");
        assert_eq!(body["description"], "build failed");
        assert!(body.get("logs").is_none());
    }

    #[tokio::test]
    async fn test_logs_body_empty_list_reports_no_deployments() {
        let body = logs_body(Vec::new()).await;
        assert_eq!(body, json!({ "logs": "No deployments found" }));
    }

    #[tokio::test]
    async fn test_logs_body_without_log_path_uses_summary() {
        let list = vec![Deployment {
            deployment_id: Some("d3".into()),
            status: Some("running".into()),
            title: Some("redeploy".into()),
            ..Default::default()
        }];
        let body = logs_body(list).await;
        assert_eq!(body["description"], "redeploy");
        assert!(body.get("logs").is_none());
    }

    #[tokio::test]
    async fn test_read_log_file_missing_returns_placeholder() {
        let content = read_log_file("/nonexistent/deploy.log").await;
        assert_eq!(content, "Log file not available");
    }
}
