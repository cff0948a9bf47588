// PropertyData tools: one generic tool type driven by the catalog table

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{descriptor_schema, Tool, ToolRegistry};
use anyhow::{Context, Result};
use propertydata_core::{catalog, map_arguments, ApiExecutor, ToolDescriptor};
use std::sync::Arc;

/// A catalog entry bound to the executor that performs its remote call
pub struct PropertyDataTool {
    descriptor: &'static ToolDescriptor,
    executor: Arc<dyn ApiExecutor>,
}

impl PropertyDataTool {
    pub fn new(descriptor: &'static ToolDescriptor, executor: Arc<dyn ApiExecutor>) -> Self {
        Self {
            descriptor,
            executor,
        }
    }
}

#[async_trait::async_trait]
impl Tool for PropertyDataTool {
    fn schema(&self) -> ToolSchema {
        descriptor_schema(self.descriptor)
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let binding = self.descriptor.binding();
        let params = map_arguments(self.descriptor, &arguments)
            .with_context(|| format!("Invalid arguments for {}", binding.tool_name))?;

        tracing::info!(tool = binding.tool_name, path = binding.path, "Calling PropertyData API");

        let result = self
            .executor
            .get(binding.path, &params)
            .await
            .with_context(|| format!("{} failed", binding.tool_name))?;

        let text = serde_json::to_string_pretty(&result.into_value())?;
        Ok(CallToolResult::text(text))
    }
}

/// Registry holding one tool per catalog entry, in catalog order
pub fn property_registry(executor: Arc<dyn ApiExecutor>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for descriptor in catalog() {
        registry.register(Arc::new(PropertyDataTool::new(descriptor, executor.clone())));
    }
    registry
}
