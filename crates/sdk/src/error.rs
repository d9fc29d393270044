//! Error types for the NeoDB SDK.

use serde::Deserialize;

/// Result type for SDK operations.
pub type NeoDbResult<T> = Result<T, NeoDbError>;

/// Error types that can occur when talking to a NeoDB instance.
#[derive(Debug, thiserror::Error)]
pub enum NeoDbError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The request did not complete before the configured deadline.
    #[error("Request timed out")]
    Timeout,

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input, rejected before any request is sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl NeoDbError {
    /// HTTP status carried by this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(error_response) => error_response.into_message(),
            Err(_) => None,
        };

        let message = message.unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Request failed")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        });

        Self::Api { status, message }
    }
}

/// Error body shapes returned by NeoDB (Django Ninja uses `detail`).
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorResponse {
    fn into_message(self) -> Option<String> {
        self.detail.or(self.error).or(self.message)
    }
}
