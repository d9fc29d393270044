// Tool call failures, recovered at the dispatcher boundary

use neodb_sdk::NeoDbError;
use serde_json::{json, Value};

/// Why a tool call failed.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Missing or malformed tool parameter; no request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Tool name is not registered; no request was sent.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Upstream answered with a non-success status.
    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Upstream answered 404 for a single-item lookup.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream did not answer before the deadline.
    #[error("Upstream request timed out")]
    UpstreamTimeout,

    /// Connection or decoding failure talking to upstream.
    #[error("Upstream request failed: {0}")]
    Transport(String),
}

impl ToolError {
    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::UnknownTool(_) => "unknown_tool",
            Self::Upstream { .. } => "upstream_error",
            Self::NotFound(_) => "not_found",
            Self::UpstreamTimeout => "upstream_timeout",
            Self::Transport(_) => "transport_error",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Structured failure descriptor returned to the caller.
    pub fn to_value(&self) -> Value {
        json!({
            "error": self.kind(),
            "message": self.to_string(),
            "status": self.status(),
        })
    }
}

impl From<NeoDbError> for ToolError {
    fn from(err: NeoDbError) -> Self {
        match err {
            NeoDbError::InvalidInput(msg) => Self::InvalidArgument(msg),
            NeoDbError::Api { status, message } => Self::Upstream { status, message },
            NeoDbError::NotFound(what) => Self::NotFound(what),
            NeoDbError::Timeout => Self::UpstreamTimeout,
            other => Self::Transport(other.to_string()),
        }
    }
}
