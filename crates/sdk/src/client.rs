//! Main client for the NeoDB SDK.

use crate::api::{CatalogApi, UsersApi};
use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
use crate::error::{NeoDbError, NeoDbResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the NeoDB API.
#[derive(Debug, Clone)]
pub struct NeoDbClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl NeoDbClient {
    /// Create a new client builder.
    pub fn builder() -> NeoDbClientBuilder {
        NeoDbClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> NeoDbResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the users API.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Get the catalog API.
    pub fn catalog(&self) -> CatalogApi<'_> {
        CatalogApi::new(self)
    }
}

/// Builder for creating a NeoDbClient.
pub struct NeoDbClientBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
    timeout: Duration,
}

impl NeoDbClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL of the NeoDB instance.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> NeoDbResult<NeoDbClient> {
        let base_url_str = self
            .base_url
            .ok_or_else(|| NeoDbError::Config("base_url is required".to_string()))?;

        let access_token = self
            .access_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| NeoDbError::Config("access_token is required".to_string()))?;

        let base_url = Url::parse(base_url_str.trim())?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(NeoDbError::Config(format!(
                "base_url must be http or https, got: {}",
                base_url.scheme()
            )));
        }

        let config = ClientConfig {
            base_url,
            access_token,
            timeout: self.timeout,
        };

        NeoDbClient::from_config(config)
    }
}

impl Default for NeoDbClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let client = NeoDbClient::builder()
            .base_url("https://neodb.social")
            .access_token("tok")
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();

        assert_eq!(client.config().base_url.as_str(), "https://neodb.social/");
        assert_eq!(client.config().timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = NeoDbClient::builder().access_token("tok").build();
        assert!(matches!(result, Err(NeoDbError::Config(_))));
    }

    #[test]
    fn test_builder_requires_token() {
        let result = NeoDbClient::builder()
            .base_url("https://neodb.social")
            .access_token("  ")
            .build();
        assert!(matches!(result, Err(NeoDbError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = NeoDbClient::builder()
            .base_url("not a url")
            .access_token("tok")
            .build();
        assert!(matches!(result, Err(NeoDbError::InvalidUrl(_))));

        let result = NeoDbClient::builder()
            .base_url("ftp://neodb.social")
            .access_token("tok")
            .build();
        assert!(matches!(result, Err(NeoDbError::Config(_))));
    }
}
