// Tool registry: the fixed catalog and call dispatch

use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
use crate::tools::catalog::{ToolCall, ToolKind};
use crate::tools::format;
use crate::tools::NeoDbApi;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Routes tool calls to the NeoDB backend.
///
/// The descriptor table is built once and never changes, so `list_schemas`
/// returns the same tools in the same order for the life of the process.
pub struct ToolRegistry {
    schemas: Vec<ToolSchema>,
    backend: Arc<dyn NeoDbApi>,
}

impl ToolRegistry {
    pub fn new(backend: Arc<dyn NeoDbApi>) -> Self {
        Self {
            schemas: ToolKind::ALL.into_iter().map(ToolKind::schema).collect(),
            backend,
        }
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> &[ToolSchema] {
        &self.schemas
    }

    /// Validate and run a tool call, returning the upstream payload untouched.
    pub async fn call(&self, name: &str, arguments: Option<Value>) -> Result<Value, ToolError> {
        let call = ToolCall::parse(name, arguments)?;
        self.dispatch(&call).await
    }

    async fn dispatch(&self, call: &ToolCall) -> Result<Value, ToolError> {
        debug!(tool = call.kind().name(), "Dispatching tool call");

        let result = match call {
            ToolCall::GetUserInfo => self.backend.user_info().await,
            ToolCall::SearchBooks(args) => self.backend.search_books(&args.query).await,
            ToolCall::GetBook(args) => self.backend.get_book(&args.book_id).await,
        };

        Ok(result?)
    }

    /// Run a tool call and render it as an MCP result.
    ///
    /// Failures come back as `isError` results; nothing here is fatal.
    pub async fn execute(&self, name: &str, arguments: Option<Value>) -> CallToolResult {
        let outcome = match ToolCall::parse(name, arguments) {
            Ok(call) => self.dispatch(&call).await.map(|value| (call, value)),
            Err(e) => Err(e),
        };

        match outcome {
            Ok((call, value)) => render_success(&call, value),
            Err(e) => {
                warn!(tool = name, kind = e.kind(), error = %e, "Tool call failed");
                render_error(&e)
            }
        }
    }
}

fn render_success(call: &ToolCall, value: Value) -> CallToolResult {
    let summary = match call {
        ToolCall::GetUserInfo => format::user_summary(&value),
        ToolCall::SearchBooks(args) => format::search_summary(&args.query, &value),
        ToolCall::GetBook(_) => format::book_summary(&value),
    };
    let raw = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());

    CallToolResult {
        content: vec![ToolContent::text(summary), ToolContent::text(raw)],
        structured_content: value.is_object().then_some(value),
        is_error: None,
    }
}

fn render_error(err: &ToolError) -> CallToolResult {
    CallToolResult {
        content: vec![ToolContent::error(err.to_string())],
        structured_content: Some(err.to_value()),
        is_error: Some(true),
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}
