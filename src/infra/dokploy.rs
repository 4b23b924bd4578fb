//! Dokploy tRPC HTTP client
//!
//! Wraps the upstream procedure-call API behind a single `call` method,
//! reusing one connection pool for all requests.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Dokploy API client
///
/// Queries use GET with the input object JSON-encoded in the `input`
/// query parameter (tRPC's calling convention for read procedures).
/// Base URL and token stay optional so a missing configuration surfaces
/// as an error on the call that needs it, not at startup.
#[derive(Clone)]
pub struct DokployClient {
    client: Client,
    base_url: Option<String>,
    token: Option<String>,
}

impl DokployClient {
    pub fn new(base_url: Option<String>, token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            token,
        }
    }

    /// Call a read procedure and return its decoded result.
    ///
    /// The token is sent both as a bearer header and as `x-api-key`;
    /// Dokploy accepts either depending on version.
    pub async fn call(&self, procedure: &str, input: &Value) -> Result<Value, DokployError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or(DokployError::NotConfigured("DOKPLOY_URL"))?;
        let token = self
            .token
            .as_deref()
            .ok_or(DokployError::NotConfigured("DOKPLOY_TOKEN"))?;

        let url = format!("{}/api/trpc/{}", base.trim_end_matches('/'), procedure);

        let response = self
            .client
            .get(&url)
            .query(&[("input", input.to_string())])
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header("x-api-key", token)
            .send()
            .await
            .map_err(DokployError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DokployError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await.map_err(DokployError::Network)?;
        Ok(unwrap_envelope(body))
    }
}

/// Unwrap the tRPC response envelope.
///
/// Results arrive as `{result: {data: {json: ...}}}`; older versions omit
/// the `json` layer, and error bodies omit the envelope entirely, so each
/// layer falls back to the one above it.
fn unwrap_envelope(mut body: Value) -> Value {
    match body.get_mut("result").and_then(|r| r.get_mut("data")) {
        Some(data) => match data.get_mut("json") {
            Some(inner) => inner.take(),
            None => data.take(),
        },
        None => body,
    }
}

/// Errors from the Dokploy client
#[derive(Debug)]
pub enum DokployError {
    /// Required environment value was never set
    NotConfigured(&'static str),
    /// Transport or decode failure
    Network(reqwest::Error),
    /// Upstream returned a non-success status
    Api { status: u16, body: String },
}

impl std::fmt::Display for DokployError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DokployError::NotConfigured(var) => write!(f, "{} not configured", var),
            DokployError::Network(e) => write!(f, "Dokploy request failed: {}", e),
            DokployError::Api { status, body } => {
                write!(f, "Dokploy API error {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for DokployError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DokployError::Network(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_full_envelope() {
        let body = json!({"result": {"data": {"json": {"name": "x"}}}});
        assert_eq!(unwrap_envelope(body), json!({"name": "x"}));
    }

    #[test]
    fn test_unwrap_envelope_without_json_layer() {
        let body = json!({"result": {"data": [1, 2, 3]}});
        assert_eq!(unwrap_envelope(body), json!([1, 2, 3]));
    }

    #[test]
    fn test_unwrap_envelope_without_result() {
        let body = json!({"error": "boom"});
        assert_eq!(unwrap_envelope(body), json!({"error": "boom"}));
    }

    #[test]
    fn test_api_error_message_contains_status_and_body() {
        let err = DokployError::Api {
            status: 403,
            body: "forbidden".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("forbidden"));
    }

    #[tokio::test]
    async fn test_call_without_base_url_fails_fast() {
        let client = DokployClient::new(None, Some("tok".to_string()));
        let err = client.call("project.all", &json!({})).await.unwrap_err();
        assert!(matches!(err, DokployError::NotConfigured("DOKPLOY_URL")));
    }

    #[tokio::test]
    async fn test_call_without_token_fails_fast() {
        let client = DokployClient::new(Some("http://localhost".to_string()), None);
        let err = client.call("project.all", &json!({})).await.unwrap_err();
        assert!(matches!(err, DokployError::NotConfigured("DOKPLOY_TOKEN")));
    }
}
