//! Upstream project shapes and application flattening
//!
//! Dokploy has shipped two nesting shapes for project listings: applications
//! nested under per-project environments, and applications attached directly
//! to the project. Both are normalized through tolerant typed structs instead
//! of ad hoc optional-field access; applications themselves stay as opaque
//! JSON since the viewer passes them through unmodified.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// A project as returned by `project.all`, reduced to the fields the
/// viewer needs. Unknown fields are ignored, absent ones default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: Option<String>,
    pub environments: Vec<Environment>,
    pub applications: Vec<Value>,
}

/// An environment nested inside a project.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub applications: Vec<Value>,
}

/// Flatten a `project.all` result into a single application list.
///
/// Collects environment-nested applications first, then any attached
/// directly to the project. A non-array top level or an element that is
/// not a project object is logged and skipped rather than failing the
/// whole listing.
pub fn collect_applications(projects: &Value) -> Vec<Value> {
    let Some(list) = projects.as_array() else {
        warn!(shape = %value_kind(projects), "project.all did not return an array");
        return Vec::new();
    };

    let mut apps = Vec::new();
    for entry in list {
        let project: Project = match serde_json::from_value(entry.clone()) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "Skipping project entry with unexpected shape");
                continue;
            }
        };

        for env in project.environments {
            apps.extend(env.applications);
        }
        apps.extend(project.applications);
    }

    apps
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_from_environments() {
        let projects = json!([
            {
                "name": "web",
                "environments": [
                    {"applications": [{"applicationId": "a"}, {"applicationId": "b"}]},
                    {"applications": [{"applicationId": "c"}]}
                ]
            }
        ]);
        let apps = collect_applications(&projects);
        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0]["applicationId"], "a");
    }

    #[test]
    fn test_collect_from_direct_applications() {
        let projects = json!([
            {"name": "flat", "applications": [{"applicationId": "x"}]}
        ]);
        let apps = collect_applications(&projects);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0]["applicationId"], "x");
    }

    #[test]
    fn test_collect_counts_both_shapes() {
        let projects = json!([
            {
                "name": "mixed",
                "environments": [{"applications": [{"applicationId": "a"}]}],
                "applications": [{"applicationId": "b"}]
            },
            {
                "name": "empty"
            }
        ]);
        let apps = collect_applications(&projects);
        assert_eq!(apps.len(), 2);
    }

    #[test]
    fn test_collect_non_array_returns_empty() {
        assert!(collect_applications(&json!({"error": "nope"})).is_empty());
        assert!(collect_applications(&json!(null)).is_empty());
    }

    #[test]
    fn test_collect_skips_malformed_entries() {
        let projects = json!([
            "not-a-project",
            {"name": "ok", "applications": [{"applicationId": "y"}]}
        ]);
        let apps = collect_applications(&projects);
        assert_eq!(apps.len(), 1);
    }
}
