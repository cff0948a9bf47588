// Shared types for the PropertyData tool catalog and dispatch path

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON kind a tool parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Number,
    Integer,
    Boolean,
}

impl ParamKind {
    /// JSON Schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Integer => "integer",
            ParamKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub key: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub help: &'static str,
}

impl ParamSpec {
    pub const fn required(key: &'static str, kind: ParamKind, help: &'static str) -> Self {
        Self {
            key,
            kind,
            required: true,
            help,
        }
    }

    pub const fn optional(key: &'static str, kind: ParamKind, help: &'static str) -> Self {
        Self {
            key,
            kind,
            required: false,
            help,
        }
    }
}

/// One row of the catalog: what the tool is called, what it takes, and
/// which remote path it hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub params: &'static [ParamSpec],
}

impl ToolDescriptor {
    /// Endpoint binding for this tool
    pub fn binding(&self) -> EndpointBinding {
        EndpointBinding {
            tool_name: self.name,
            path: self.path,
            params: self.params,
        }
    }

    /// Keys of all required parameters, in declaration order
    pub fn required_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|p| p.required).map(|p| p.key)
    }
}

/// Mapping from a tool name to the remote path and the parameters forwarded to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointBinding {
    pub tool_name: &'static str,
    pub path: &'static str,
    pub params: &'static [ParamSpec],
}

/// Ordered query parameters for an outbound call (credential excluded)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of one remote call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    /// 2xx response, parsed JSON body untouched
    Success(serde_json::Value),
    /// Transport failure or non-2xx status
    Failure(String),
}

impl ApiResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    /// JSON value to render back to the client.
    ///
    /// Failures are wrapped as `{"error": message}`.
    pub fn into_value(self) -> serde_json::Value {
        match self {
            ApiResult::Success(value) => value,
            ApiResult::Failure(message) => serde_json::json!({ "error": message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_preserve_order() {
        let mut params = QueryParams::new();
        params.push("postcode", "W14 9JH");
        params.push("bedrooms", "2");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("postcode", "W14 9JH"), ("bedrooms", "2")]);
        assert_eq!(params.get("bedrooms"), Some("2"));
        assert!(!params.contains_key("points"));
    }

    #[test]
    fn test_failure_renders_as_error_object() {
        let value = ApiResult::Failure("API Error 404: not found".to_string()).into_value();
        assert_eq!(value, serde_json::json!({ "error": "API Error 404: not found" }));
    }

    #[test]
    fn test_success_is_passed_through() {
        let body = serde_json::json!({ "status": "success", "data": { "average": 512000 } });
        let result = ApiResult::Success(body.clone());
        assert!(result.is_success());
        assert_eq!(result.into_value(), body);
    }

    #[test]
    fn test_param_kind_names() {
        assert_eq!(ParamKind::Integer.as_str(), "integer");
        assert_eq!(
            serde_json::to_value(ParamKind::Boolean).unwrap(),
            serde_json::json!("boolean")
        );
    }
}
