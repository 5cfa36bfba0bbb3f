use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{AnyDelimiterCodec, FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, info, warn};

use super::protocol::{
    CallToolParams, CallToolResult, DEFAULT_PROTOCOL_VERSION, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerInfo,
};
use crate::error::MealBotError;
use crate::tool::{ToolError, ToolExecutor, ToolRegistry};

/// An MCP server exposing a tool registry over newline-delimited JSON-RPC.
#[derive(Debug, Clone)]
pub struct MCPServer {
    executor: ToolExecutor,
    info: ServerInfo,
}

impl MCPServer {
    /// Creates a server for the given registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            executor: ToolExecutor::new(Arc::new(registry)),
            info: ServerInfo::default(),
        }
    }

    /// Overrides the reported server name and version.
    pub fn with_info(mut self, info: ServerInfo) -> Self {
        self.info = info;
        self
    }

    /// Serves on the process stdin/stdout until stdin closes.
    pub async fn serve_stdio(self) -> Result<(), MealBotError> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serves requests read from `reader`, writing responses to `writer`.
    ///
    /// Each message is handled on its own task, so slow tool calls do not
    /// block later requests. Responses are written by a single task in
    /// completion order. Returns once the reader hits EOF and every
    /// in-flight request has been answered.
    ///
    /// Input is framed as raw bytes; a line that is not UTF-8 or not JSON
    /// gets a parse error reply and the loop keeps reading.
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<(), MealBotError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut lines = FramedRead::new(reader, AnyDelimiterCodec::new(b"\n".to_vec(), b"\n".to_vec()));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer_task = tokio::spawn(async move {
            while let Some(response) = rx.recv().await {
                sink.send(serde_json::to_string(&response)?).await?;
            }
            Ok::<(), MealBotError>(())
        });

        info!(server = %self.info.name, tools = self.executor.get_tool_definitions().len(), "MCP server listening");

        let mut read_error = None;
        while let Some(line) = lines.next().await {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "Reading input failed");
                    read_error = Some(e);
                    break;
                }
            };
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let server = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_message(&line).await {
                    if tx.send(response).is_err() {
                        warn!("Response dropped, writer closed");
                    }
                }
            });
        }

        debug!("Input closed, draining in-flight requests");
        drop(tx);
        writer_task.await??;

        match read_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Handles one raw message. Returns `None` for notifications.
    pub async fn handle_message(&self, line: &[u8]) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_slice(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparseable message");
                return Some(JsonRpcResponse::failure(Value::Null, JsonRpcError::parse_error(e)));
            }
        };

        let request = match JsonRpcRequest::from_value(&value) {
            Ok(request) => request,
            Err(error) => {
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                return Some(JsonRpcResponse::failure(id, error));
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "Notification received");
            return None;
        };

        Some(match self.handle_request(&request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    async fn handle_request(&self, method: &str, params: Option<Value>) -> Result<Value, JsonRpcError> {
        debug!(method, "Request received");
        match method {
            "initialize" => self.initialize(params),
            "ping" => Ok(json!({})),
            "tools/list" => to_result(&ListToolsResult {
                tools: self.executor.get_tool_definitions(),
            }),
            "tools/call" => self.call_tool(params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        }
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params).map_err(JsonRpcError::invalid_params)?,
            None => InitializeParams::default(),
        };

        to_result(&InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
            capabilities: json!({"tools": {"listChanged": false}}),
            server_info: self.info.clone(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("missing params"))
            .and_then(|p| serde_json::from_value(p).map_err(JsonRpcError::invalid_params))?;

        let arguments = params.arguments.unwrap_or(Value::Null);
        let result = match self.executor.execute(&params.name, arguments).await {
            Ok(result) => CallToolResult::success(result.output),
            Err(ToolError::NotFound(name)) => {
                return Err(JsonRpcError::invalid_params(format!("Unknown tool: {}", name)));
            }
            Err(error) => CallToolResult::error(error.to_string()),
        };

        to_result(&result)
    }
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(JsonRpcError::internal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
    use crate::tool::{Tool, ToolResult};
    use async_trait::async_trait;

    struct Upper;

    #[async_trait]
    impl Tool for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn description(&self) -> &str {
            "Uppercases text"
        }

        fn parameters_schema(&self) -> Value {
            json!({"type": "object", "properties": {"text": {"type": "string"}}})
        }

        async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
            let text = args["text"]
                .as_str()
                .ok_or_else(|| ToolError::InvalidArguments("text is required".to_string()))?;
            Ok(ToolResult::ok(json!({"text": text.to_uppercase()})))
        }
    }

    fn server() -> MCPServer {
        MCPServer::new(ToolRegistry::new().with_tool(Arc::new(Upper)))
    }

    async fn call(line: Value) -> JsonRpcResponse {
        server().handle_message(line.to_string().as_bytes()).await.unwrap()
    }

    #[tokio::test]
    async fn initialize_echoes_protocol_version() {
        let response = call(json!({
            "jsonrpc": "2.0", "id": 1, "method": "initialize",
            "params": {"protocolVersion": "2025-06-18", "capabilities": {}, "clientInfo": {"name": "t", "version": "0"}}
        }))
        .await;

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2025-06-18");
        assert_eq!(result["serverInfo"]["name"], "MealBot");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn initialize_without_params_uses_default_version() {
        let response = call(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).await;
        assert_eq!(response.result.unwrap()["protocolVersion"], DEFAULT_PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn notifications_get_no_response() {
        let line = json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string();
        assert!(server().handle_message(line.as_bytes()).await.is_none());
    }

    #[tokio::test]
    async fn ping_and_list() {
        let pong = call(json!({"jsonrpc": "2.0", "id": "a", "method": "ping"})).await;
        assert_eq!(pong.id, json!("a"));
        assert_eq!(pong.result, Some(json!({})));

        let list = call(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;
        let tools = &list.result.unwrap()["tools"];
        assert_eq!(tools[0]["name"], "upper");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn call_success_and_tool_error() {
        let ok = call(json!({
            "jsonrpc": "2.0", "id": 3, "method": "tools/call",
            "params": {"name": "upper", "arguments": {"text": "penne"}}
        }))
        .await;
        let result = ok.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"], json!({"text": "PENNE"}));

        let failed = call(json!({
            "jsonrpc": "2.0", "id": 4, "method": "tools/call",
            "params": {"name": "upper", "arguments": {}}
        }))
        .await;
        let result = failed.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Invalid arguments: text is required");
    }

    #[tokio::test]
    async fn protocol_errors() {
        let unknown_tool = call(json!({
            "jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {"name": "nope"}
        }))
        .await;
        assert_eq!(unknown_tool.error.unwrap().code, INVALID_PARAMS);

        let unknown_method = call(json!({"jsonrpc": "2.0", "id": 6, "method": "resources/list"})).await;
        assert_eq!(unknown_method.error.unwrap().code, METHOD_NOT_FOUND);

        let garbage = server().handle_message(b"{not json").await.unwrap();
        assert_eq!(garbage.id, Value::Null);
        assert_eq!(garbage.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_parse_error() {
        let response = server().handle_message(b"\xff\xfe").await.unwrap();
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn explicit_null_id_still_gets_a_reply() {
        let response = call(json!({"jsonrpc": "2.0", "id": null, "method": "ping"})).await;
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn wrong_jsonrpc_version_is_rejected() {
        let response = call(json!({"jsonrpc": "1.0", "id": 9, "method": "ping"})).await;
        assert_eq!(response.id, json!(9));
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }
}
