// MCP server: newline-delimited JSON-RPC over stdio

use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    DEFAULT_PROTOCOL_VERSION, JSONRPC_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use std::io::ErrorKind;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "neodb";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest accepted input frame; longer lines are discarded up to the next newline.
pub const MAX_FRAME_LEN: usize = 1024 * 1024;

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        info!("MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve one request at a time from `reader`, writing responses to `writer`.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut frames = FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_FRAME_LEN));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());
        // FramedRead yields one `None` after a decode error before it resumes reading.
        let mut resuming = false;

        loop {
            let response = match frames.next().await {
                Some(Ok(line)) => {
                    resuming = false;
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.handle_line(&line).await
                }
                Some(Err(LinesCodecError::MaxLineLengthExceeded)) => {
                    warn!(max = MAX_FRAME_LEN, "Frame too long, discarding");
                    resuming = true;
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
                Some(Err(LinesCodecError::Io(e))) if e.kind() == ErrorKind::InvalidData => {
                    warn!(error = %e, "Frame is not valid UTF-8");
                    resuming = true;
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
                Some(Err(LinesCodecError::Io(e))) => return Err(e.into()),
                None if resuming => {
                    resuming = false;
                    continue;
                }
                None => break,
            };

            if let Some(response) = response {
                sink.send(serde_json::to_string(&response)?).await?;
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle one raw frame. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparsable frame");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        match serde_json::from_value::<JsonRpcRequest>(value.clone()) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!(error = %e, "Malformed JSON-RPC request");
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()))
            }
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        debug!(method = %request.method, "Request received");
        let result = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_result(&ListToolsResult {
                tools: self.registry.list_schemas().to_vec(),
            }),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params)
                .map_err(|e| JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e)))?,
            None => InitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            info!(client = %client.name, version = %client.version, "Client connected");
        }

        to_result(&InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing tools/call params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| {
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e))
                })
            })?;

        let result = self.registry.execute(&params.name, params.arguments).await;
        to_result(&result)
    }
}

fn to_result(value: &impl Serialize) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
