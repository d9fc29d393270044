//! Configuration types for the NeoDB SDK.

use std::time::Duration;
use url::Url;

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the NeoDB client.
///
/// Built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the NeoDB instance, e.g. `https://neodb.social`.
    pub base_url: Url,
    /// Bearer token sent with every request.
    pub access_token: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(base_url: Url, access_token: impl Into<String>) -> Self {
        Self {
            base_url,
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// The token must never end up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
