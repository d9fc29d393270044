//! HTTP transport layer for the NeoDB SDK.

use crate::config::ClientConfig;
use crate::error::{NeoDbError, NeoDbResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("neodb-mcp/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for making API requests.
///
/// Every request is sent exactly once: there is no retry and no cache.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> NeoDbResult<Self> {
        let mut headers = header::HeaderMap::new();

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| NeoDbError::Config("Invalid access token format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL by appending path segments to the configured base.
    ///
    /// Segments are percent-encoded, and any path prefix on the base URL is kept.
    fn build_url(&self, segments: &[&str]) -> NeoDbResult<Url> {
        let mut url = self.config.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| {
                NeoDbError::Config(format!(
                    "{} cannot be used as a base URL",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request once and turn non-success statuses into errors.
    async fn execute(&self, request_builder: RequestBuilder) -> NeoDbResult<Response> {
        let response = request_builder.send().await.map_err(classify)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.map_err(classify)?;
        warn!(status = status.as_u16(), "Request failed");
        Err(NeoDbError::from_response(status.as_u16(), &body))
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> NeoDbResult<T> {
        self.get_with_query(segments, &[]).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> NeoDbResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "GET request");

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self.execute(request).await?;
        let bytes = response.bytes().await.map_err(classify)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn classify(err: reqwest::Error) -> NeoDbError {
    if err.is_timeout() {
        NeoDbError::Timeout
    } else {
        NeoDbError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig::new(
            url::Url::parse(base_url).unwrap(),
            "test-token",
        ))
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: Value = transport.get(&["api", "test"]).await.unwrap();
        assert_eq!(result, json!({"message": "success"}));
    }

    #[tokio::test]
    async fn test_authorization_and_accept_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/protected"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: Value = transport.get(&["api", "protected"]).await.unwrap();
        assert_eq!(result["ok"], true);
    }

    #[tokio::test]
    async fn test_query_parameters_are_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/catalog/search"))
            .and(query_param("query", "dune & friends"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: Value = transport
            .get_with_query(&["api", "catalog", "search"], &[("query", "dune & friends")])
            .await
            .unwrap();
        assert_eq!(result, json!({"data": []}));
    }

    #[tokio::test]
    async fn test_error_on_400() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/bad"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Bad Request"})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: NeoDbResult<Value> = transport.get(&["api", "bad"]).await;
        match result {
            Err(NeoDbError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Bad Request");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_retry_on_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: NeoDbResult<Value> = transport.get(&["api", "flaky"]).await;
        assert!(matches!(result, Err(NeoDbError::Api { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let mut config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap(), "t");
        config.timeout = Duration::from_millis(100);
        let transport = HttpTransport::new(Arc::new(config)).unwrap();

        let result: NeoDbResult<Value> = transport.get(&["api", "slow"]).await;
        assert!(matches!(result, Err(NeoDbError::Timeout)));
    }

    #[tokio::test]
    async fn test_timeout_while_reading_error_body() {
        use tokio::io::AsyncWriteExt;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial")
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(2)).await;
        });

        let mut config = ClientConfig::new(url::Url::parse(&format!("http://{}", addr)).unwrap(), "t");
        config.timeout = Duration::from_millis(200);
        let transport = HttpTransport::new(Arc::new(config)).unwrap();

        let result: NeoDbResult<Value> = transport.get(&["api", "me"]).await;
        assert!(matches!(result, Err(NeoDbError::Timeout)), "got {result:?}");
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: NeoDbResult<Value> = transport.get(&["api", "html"]).await;
        assert!(matches!(result, Err(NeoDbError::Json(_))));
    }

    #[test]
    fn test_build_url() {
        let transport = HttpTransport::new(create_config("http://localhost:8080")).unwrap();

        let url = transport.build_url(&["api", "me"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/me");
    }

    #[test]
    fn test_build_url_with_trailing_slash() {
        let transport = HttpTransport::new(create_config("http://localhost:8080/")).unwrap();

        let url = transport.build_url(&["api", "me"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/me");
    }

    #[test]
    fn test_build_url_keeps_prefix() {
        let transport = HttpTransport::new(create_config("https://example.com/neodb")).unwrap();

        let url = transport.build_url(&["api", "me"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/neodb/api/me");
    }

    #[test]
    fn test_build_url_encodes_segments() {
        let transport = HttpTransport::new(create_config("https://neodb.social")).unwrap();

        let url = transport.build_url(&["api", "book", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "https://neodb.social/api/book/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let config = Arc::new(ClientConfig::new(
            url::Url::parse("https://neodb.social").unwrap(),
            "bad\ntoken",
        ));
        assert!(matches!(
            HttpTransport::new(config),
            Err(NeoDbError::Config(_))
        ));
    }
}
