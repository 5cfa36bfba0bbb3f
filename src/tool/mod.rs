pub mod registry;
pub mod executor;

pub use registry::ToolRegistry;
pub use executor::ToolExecutor;
pub use tool_types::{ToolDefinition, ToolResult, ToolError, input_schema, parse_args};
pub use tool_trait::Tool;
pub use tool_trait::DynTool;

mod tool_types {
    use schemars::JsonSchema;
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::api::ApiError;

    /// Definition of a tool as advertised to the host.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ToolDefinition {
        /// The name of the tool
        pub name: String,
        /// Human readable title
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        /// A description of what the tool does
        pub description: String,
        /// JSON Schema for the tool's input parameters
        pub input_schema: Value,
    }

    /// The result of executing a tool.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ToolResult {
        /// The JSON produced by the tool
        pub output: Value,
    }

    impl ToolResult {
        /// Creates a successful result.
        pub fn ok(output: impl Into<Value>) -> Self {
            Self {
                output: output.into(),
            }
        }

        /// Serializes any value into a result.
        pub fn json<T: Serialize>(value: &T) -> Result<Self, ToolError> {
            serde_json::to_value(value)
                .map(Self::ok)
                .map_err(|e| ToolError::ExecutionFailed(e.to_string()))
        }
    }

    /// Errors that can occur when executing a tool.
    #[derive(Debug, thiserror::Error)]
    pub enum ToolError {
        #[error("Invalid arguments: {0}")]
        InvalidArguments(String),
        #[error("Execution failed: {0}")]
        ExecutionFailed(String),
        #[error("Tool not found: {0}")]
        NotFound(String),
        #[error(transparent)]
        Api(#[from] ApiError),
    }

    /// Generates the JSON Schema advertised for an argument struct.
    pub fn input_schema<T: JsonSchema>() -> Value {
        let schema = schemars::schema_for!(T);
        serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({"type": "object"}))
    }

    /// Decodes tool arguments, treating `null` as an empty object.
    pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
        let args = match args {
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other,
        };
        serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))
    }
}

mod tool_trait {
    use super::tool_types::{ToolDefinition, ToolResult, ToolError};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    /// Trait representing a tool that can be invoked by the host.
    #[async_trait]
    pub trait Tool: Send + Sync {
        /// Returns the name of the tool.
        fn name(&self) -> &str;
        /// Returns a human readable title.
        fn title(&self) -> Option<&str> {
            None
        }
        /// Returns a description of what the tool does.
        fn description(&self) -> &str;
        /// Returns the JSON Schema for the tool's input parameters.
        fn parameters_schema(&self) -> Value;

        /// Executes the tool with the given arguments.
        async fn execute(&self, args: Value) -> Result<ToolResult, ToolError>;

        /// Converts the tool to its definition.
        fn to_definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: self.name().to_string(),
                title: self.title().map(str::to_string),
                description: self.description().to_string(),
                input_schema: self.parameters_schema(),
            }
        }
    }

    /// A type alias for a dynamic tool reference.
    pub type DynTool = Arc<dyn Tool>;
}
