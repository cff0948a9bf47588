// Tool trait, ordered registry and call dispatch

use crate::protocol::{CallToolResult, JsonRpcError, ToolSchema};
use anyhow::Result;
use propertydata_core::{ParamSpec, ToolDescriptor};
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult>;
}

/// Tool registry for managing available tools.
///
/// Keeps registration order so `tools/list` is stable across calls.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a tool. A later registration under the same name replaces
    /// the earlier one in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.by_name.get(&name) {
            Some(&index) => self.tools[index] = tool,
            None => {
                self.by_name.insert(name, self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.by_name.get(name).map(|&index| self.tools[index].clone())
    }

    /// List all tool schemas in registration order
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolve `name` and run the tool.
    ///
    /// An unknown name is a protocol error. Anything the tool itself fails
    /// with becomes an `isError` result, so one bad call never takes the
    /// server down.
    pub async fn call(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, JsonRpcError> {
        let tool = self.get(name).ok_or_else(|| JsonRpcError::unknown_tool(name))?;

        match tool.execute(arguments).await {
            Ok(result) => Ok(result),
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::warn!(tool = %name, error = %message, "Tool call failed");
                Ok(CallToolResult::error(message))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_param(param: &ParamSpec) -> serde_json::Value {
    serde_json::json!({
        "type": param.kind.as_str(),
        "description": param.help
    })
}

/// MCP schema for a catalog entry
pub fn descriptor_schema(descriptor: &ToolDescriptor) -> ToolSchema {
    let properties: serde_json::Map<String, serde_json::Value> = descriptor
        .params
        .iter()
        .map(|p| (p.key.to_string(), json_schema_param(p)))
        .collect();

    ToolSchema {
        name: descriptor.name.to_string(),
        description: descriptor.description.to_string(),
        input_schema: json_schema_object(
            serde_json::Value::Object(properties),
            descriptor.required_keys().collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool {
        name: &'static str,
    }

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.name.to_string(),
                description: "Echo the arguments back".to_string(),
                input_schema: json_schema_object(json!({}), vec![]),
            }
        }

        async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
            if arguments.get("fail").is_some() {
                anyhow::bail!("asked to fail");
            }
            Ok(CallToolResult::text(arguments.to_string()))
        }
    }

    #[test]
    fn test_registry_preserves_order() {
        let mut registry = ToolRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.register(Arc::new(EchoTool { name }));
        }

        let names: Vec<_> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("alpha"));
    }

    #[test]
    fn test_reregister_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool { name: "a" }));
        registry.register(Arc::new(EchoTool { name: "b" }));
        registry.register(Arc::new(EchoTool { name: "a" }));

        let names: Vec<_> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let registry = ToolRegistry::new();
        let err = registry.call("nonexistent_tool", json!({})).await.unwrap_err();

        assert_eq!(err.code, JsonRpcError::INVALID_PARAMS);
        assert!(err.message.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_call_failure_is_flagged() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool { name: "echo" }));

        let result = registry.call("echo", json!({ "fail": true })).await.unwrap();
        assert!(result.is_error());
        assert_eq!(result.first_text(), Some("Error: asked to fail"));

        let result = registry.call("echo", json!({ "ok": 1 })).await.unwrap();
        assert!(!result.is_error());
    }

    #[test]
    fn test_descriptor_schema() {
        let descriptor = propertydata_core::find("stamp_duty_calculator").unwrap();
        let schema = descriptor_schema(descriptor);

        assert_eq!(schema.name, "stamp_duty_calculator");
        assert_eq!(
            schema.input_schema,
            json!({
                "type": "object",
                "properties": {
                    "property_value": { "type": "number", "description": "Purchase price in pounds" },
                    "first_time_buyer": {
                        "type": "boolean",
                        "description": "Whether the buyer qualifies for first-time buyer relief"
                    }
                },
                "required": ["property_value"]
            })
        );
    }
}
