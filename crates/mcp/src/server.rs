// MCP server: newline-delimited JSON-RPC 2.0 over stdio

use crate::protocol::{
    methods, CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    JSONRPC_VERSION, MCP_PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, error, info, warn};

/// Longest accepted request line
const MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

#[derive(Clone)]
pub struct McpServer {
    tools: Arc<ToolRegistry>,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(tools: ToolRegistry) -> Self {
        Self {
            tools: Arc::new(tools),
            info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Serve on the process's stdin/stdout until stdin closes
    pub async fn start(&self) -> Result<()> {
        info!("MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve requests read from `reader`, writing responses to `writer`.
    ///
    /// Each request runs on its own task; a single writer task owns the
    /// output so frames never interleave. Returns once the input is closed
    /// and every in-flight request has been answered.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut lines = FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_LINE_BYTES));
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        let writer_task = tokio::spawn(async move {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(frame) = rx.recv().await {
                if let Err(e) = sink.send(frame).await {
                    error!("Failed to write response: {}", e);
                    break;
                }
            }
        });

        while let Some(line) = lines.next().await {
            let line = match line {
                Ok(line) => line,
                Err(LinesCodecError::MaxLineLengthExceeded) => {
                    warn!("Request exceeds {} bytes, discarding", MAX_LINE_BYTES);
                    let response = JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::parse_error("request too large"),
                    );
                    send_response(&tx, &response);
                    continue;
                }
                Err(LinesCodecError::Io(e)) => {
                    error!("Error reading input: {}", e);
                    return Err(e.into());
                }
            };

            let server = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    send_response(&tx, &response);
                }
            });
        }

        info!("Input closed, shutting down");
        drop(tx);
        writer_task.await?;
        Ok(())
    }

    /// Handle one raw input line. `None` means nothing is sent back.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        debug!("Received: {}", line);

        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(e),
                ))
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_request(format!("Invalid request: {}", e)),
                ))
            }
        };

        self.handle_request(request).await
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = match request.id.clone() {
            Some(id) => id,
            None => {
                match request.method.as_str() {
                    methods::INITIALIZED => info!("Client initialized"),
                    other => debug!(method = %other, "Notification received"),
                }
                return None;
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request(format!(
                    "Unsupported jsonrpc version: {}",
                    request.jsonrpc
                )),
            ));
        }

        let outcome = match request.method.as_str() {
            methods::INITIALIZE => self.initialize(request.params),
            methods::PING => Ok(Value::Object(Default::default())),
            methods::TOOLS_LIST => to_result(&ListToolsResult {
                tools: self.tools.list_schemas(),
            }),
            methods::TOOLS_CALL => self.call_tool(request.params).await,
            other => {
                debug!(method = %other, "Unknown method");
                Err(JsonRpcError::method_not_found(other))
            }
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: Option<InitializeParams> = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e)))?;

        if let Some(client) = params.as_ref().and_then(|p| p.client_info.as_ref()) {
            info!(client = %client.name, version = %client.version, "Client connected");
        }

        let protocol_version = params
            .map(|p| p.protocol_version)
            .unwrap_or_else(|| MCP_PROTOCOL_VERSION.to_string());

        to_result(&InitializeResult {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params for tools/call"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| {
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e))
                })
            })?;

        info!(tool = %params.name, "Tool call");
        let result = self.tools.call(&params.name, params.arguments).await?;
        to_result(&result)
    }
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

fn send_response(tx: &mpsc::UnboundedSender<String>, response: &JsonRpcResponse) {
    match serde_json::to_string(response) {
        Ok(frame) => {
            if tx.send(frame).is_err() {
                warn!("Output closed, dropping response");
            }
        }
        Err(e) => error!("Failed to serialize response: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::property_registry;
    use propertydata_core::{ApiExecutor, ApiResult, QueryParams};
    use serde_json::json;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    struct FixedExecutor(ApiResult);

    #[async_trait::async_trait]
    impl ApiExecutor for FixedExecutor {
        async fn get(&self, _path: &str, _params: &QueryParams) -> Result<ApiResult> {
            Ok(self.0.clone())
        }
    }

    fn server_with(reply: ApiResult) -> McpServer {
        McpServer::new(property_registry(Arc::new(FixedExecutor(reply))))
    }

    fn server() -> McpServer {
        server_with(ApiResult::Success(json!({ "status": "success" })))
    }

    async fn request(server: &McpServer, body: Value) -> JsonRpcResponse {
        server.handle_line(&body.to_string()).await.unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let response = request(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "test-client", "version": "1.0" }
                }
            }),
        )
        .await;

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "propertydata-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_null_id_is_answered() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#)
            .await
            .unwrap();
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_blank_line_ignored() {
        assert!(server().handle_line("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_parse_error() {
        let response = server().handle_line("{not json").await.unwrap();
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.error.unwrap().code, JsonRpcError::PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_invalid_request_keeps_id() {
        let response = request(&server(), json!({ "jsonrpc": "2.0", "id": 9 })).await;
        assert_eq!(response.id, json!(9));
        assert_eq!(response.error.unwrap().code, JsonRpcError::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = request(
            &server(),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "resources/list" }),
        )
        .await;
        assert_eq!(response.error.unwrap().code, JsonRpcError::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ping() {
        let response = request(&server(), json!({ "jsonrpc": "2.0", "id": "p", "method": "ping" })).await;
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_tools_list_is_stable() {
        let server = server();
        let list = json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/list" });

        let first = request(&server, list.clone()).await.result.unwrap();
        let second = request(&server, list).await.result.unwrap();
        assert_eq!(first, second);

        let tools = first["tools"].as_array().unwrap();
        assert_eq!(tools.len(), propertydata_core::catalog().len());
        assert_eq!(tools[0]["name"], "get_prices");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["postcode"]));
    }

    #[tokio::test]
    async fn test_tools_call_success() {
        let response = request(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "tools/call",
                "params": { "name": "get_prices", "arguments": { "postcode": "SW1A 1AA" } }
            }),
        )
        .await;

        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["content"][0]["text"], "{\n  \"status\": \"success\"\n}");
        assert!(result.get("isError").is_none());
    }

    #[tokio::test]
    async fn test_tools_call_api_failure_not_flagged() {
        let server = server_with(ApiResult::Failure("API Error 404: not found".to_string()));
        let response = request(
            &server,
            json!({
                "jsonrpc": "2.0",
                "id": 5,
                "method": "tools/call",
                "params": { "name": "get_prices", "arguments": { "postcode": "SW1A 1AA" } }
            }),
        )
        .await;

        let result = response.result.unwrap();
        assert_eq!(
            result["content"][0]["text"],
            "{\n  \"error\": \"API Error 404: not found\"\n}"
        );
        assert!(result.get("isError").is_none());
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_is_protocol_error() {
        let response = request(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 6,
                "method": "tools/call",
                "params": { "name": "nonexistent_tool", "arguments": {} }
            }),
        )
        .await;

        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, JsonRpcError::INVALID_PARAMS);
        assert_eq!(error.message, "Unknown tool: nonexistent_tool");
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let response = request(
            &server(),
            json!({ "jsonrpc": "2.0", "id": 7, "method": "tools/call" }),
        )
        .await;
        assert_eq!(response.error.unwrap().code, JsonRpcError::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_argument_error_flagged() {
        let response = request(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 8,
                "method": "tools/call",
                "params": { "name": "get_prices" }
            }),
        )
        .await;

        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("Error: Invalid arguments for get_prices"));
    }

    #[tokio::test]
    async fn test_serve_over_stream() {
        let (mut client_in, server_in) = tokio::io::duplex(64 * 1024);
        let (server_out, mut client_out) = tokio::io::duplex(64 * 1024);

        let server = server();
        let handle = tokio::spawn(async move { server.serve(server_in, server_out).await });

        let input = [
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": { "protocolVersion": "2024-11-05" } }),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
            json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": { "name": "get_crime", "arguments": { "postcode": "E1 6AN" } } }),
        ];
        for message in &input {
            client_in
                .write_all(format!("{}\n", message).as_bytes())
                .await
                .unwrap();
        }
        client_in.write_all(b"garbage\n").await.unwrap();
        drop(client_in);

        let mut output = String::new();
        client_out.read_to_string(&mut output).await.unwrap();
        handle.await.unwrap().unwrap();

        let responses: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(responses.len(), 4);

        let by_id: HashMap<String, &Value> = responses
            .iter()
            .map(|r| (r["id"].to_string(), r))
            .collect();
        assert!(by_id["1"]["result"]["serverInfo"].is_object());
        assert!(by_id["2"]["result"]["tools"].is_array());
        assert_eq!(by_id["3"]["result"]["content"][0]["type"], "text");
        assert_eq!(by_id["null"]["error"]["code"], JsonRpcError::PARSE_ERROR);
    }
}
