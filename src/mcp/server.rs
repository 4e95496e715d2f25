// ABOUTME: JSON-RPC request routing and the newline-delimited stdio transport
// ABOUTME: Handles initialize, ping, tools/list, and tools/call against the tool registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Server
//!
//! One JSON-RPC message per line on stdin, one response per line on stdout.
//! Notifications get no response. Logs go to stderr so they never corrupt
//! the protocol stream.

use std::sync::Arc;
use std::time::Instant;

use nalssi_core::constants::service::{PROTOCOL_VERSION, SERVICE_NAME};
use nalssi_core::errors::{AppError, AppResult};
use serde_json::{json, Value};
use tokio::io::{self as tokio_io, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::signal;
use tracing::{debug, error, info, warn};

use super::resources::ServerResources;
use super::schema::{Content, InitializeResponse, ToolCall, ToolResponse};
use crate::jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::tools::context::ToolExecutionContext;
use crate::tools::registry::ToolRegistry;

/// Routes JSON-RPC requests to the tool registry
#[derive(Debug, Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    resources: Arc<ServerResources>,
}

impl McpServer {
    /// Create a server over a populated registry
    #[must_use]
    pub const fn new(registry: Arc<ToolRegistry>, resources: Arc<ServerResources>) -> Self {
        Self {
            registry,
            resources,
        }
    }

    /// Registered tools
    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Shared resources handed to tools
    #[must_use]
    pub fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Handle one request; `None` for notifications
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        debug!(method = %request.method, id = ?request.id, "Handling request");

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        let response = if request.jsonrpc == JSONRPC_VERSION {
            self.route(&request).await
        } else {
            JsonRpcError::unsupported_version(&request.jsonrpc).into_response(request.id.clone())
        };

        debug!(
            method = %request.method,
            elapsed_ms = start_time.elapsed().as_millis(),
            success = response.is_success(),
            "Request completed"
        );
        Some(response)
    }

    /// Parse and handle one line of input
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                Some(JsonRpcError::parse_error(e).into_response(None))
            }
        }
    }

    async fn route(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();
        match request.method.as_str() {
            "initialize" => Self::respond(id, Self::handle_initialize()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                json!({ "tools": self.registry.all_schemas() }),
            ),
            "tools/call" => {
                let result = self.handle_tools_call(request.params.clone()).await;
                Self::respond(id, result)
            }
            method => {
                debug!(method, "Unknown method");
                JsonRpcError::method_not_found(method).into_response(id)
            }
        }
    }

    fn respond(id: Option<Value>, result: AppResult<Value>) -> JsonRpcResponse {
        match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => {
                warn!(code = ?e.code, "Request failed: {}", e);
                JsonRpcResponse::from_app_error(id, &e)
            }
        }
    }

    fn handle_initialize() -> AppResult<Value> {
        let response = InitializeResponse::new(
            PROTOCOL_VERSION.to_owned(),
            SERVICE_NAME.to_owned(),
            env!("CARGO_PKG_VERSION").to_owned(),
        );
        Ok(serde_json::to_value(response)?)
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> AppResult<Value> {
        let params = params.ok_or_else(|| AppError::missing_field("params"))?;
        let call: ToolCall = serde_json::from_value(params)
            .map_err(|e| AppError::invalid_input(format!("Invalid tools/call params: {e}")))?;
        let args = call.arguments.unwrap_or_else(|| json!({}));

        let context = ToolExecutionContext::new(Arc::clone(&self.resources));
        info!(
            request_id = %context.request_id,
            tool = %call.name,
            "Calling tool"
        );
        let result = self.registry.execute(&call.name, args, &context).await?;

        let text = serde_json::to_string_pretty(&result.content)?;
        let response = ToolResponse {
            content: vec![Content::Text { text }],
            is_error: result.is_error,
            structured_content: Some(result.content),
        };
        Ok(serde_json::to_value(response)?)
    }

    /// Serve newline-delimited JSON-RPC until the reader is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing a response fails
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let Some(response) = self.handle_line(trimmed).await else {
                continue;
            };
            let response_str = match serde_json::to_string(&response) {
                Ok(s) => s,
                Err(e) => {
                    error!("Failed to serialize response: {}", e);
                    continue;
                }
            };

            writer.write_all(response_str.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        Ok(())
    }

    /// Serve stdin and stdout until end of input or Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if stdio processing fails
    pub async fn run_stdio(&self) -> AppResult<()> {
        info!(
            tools = self.registry.len(),
            "MCP stdio transport ready - listening on stdin/stdout"
        );

        let reader = BufReader::new(tokio_io::stdin());
        let writer = tokio_io::stdout();

        tokio::select! {
            result = self.run(reader, writer) => {
                info!("MCP stdio transport ended");
                result
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl-C, shutting down");
                Ok(())
            }
        }
    }
}
