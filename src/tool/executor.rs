use std::sync::Arc;
use serde_json::Value;
use tracing::{debug, warn};

use crate::tool::{ToolDefinition, ToolError, ToolRegistry, ToolResult};

/// Resolves tool calls against a registry and runs them.
///
/// The registry is immutable once built, so the executor is cheap to clone
/// into concurrent tasks.
#[derive(Debug, Clone)]
pub struct ToolExecutor {
    registry: Arc<ToolRegistry>,
}

impl ToolExecutor {
    /// Creates a new tool executor with the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Returns all tool definitions for advertising to the host.
    pub fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry.to_tool_definitions()
    }

    /// Returns whether a tool with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }

    /// Executes a single tool call.
    pub async fn execute(&self, name: &str, arguments: Value) -> Result<ToolResult, ToolError> {
        let tool = self
            .registry
            .get(name)
            .cloned()
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        debug!(tool = name, "Executing tool");
        let result = tool.execute(arguments).await;
        if let Err(error) = &result {
            warn!(tool = name, %error, "Tool failed");
        }
        result
    }
}
