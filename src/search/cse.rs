//! Google Custom Search JSON API client
//!
//! Issues `GET {endpoint}?q=..&cx=..&num=..` and hands back the decoded body.
//! Authentication uses either an API key (sent as the `key` query parameter)
//! or an OAuth access token (sent as a bearer header).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::provider::{ProviderResponse, SearchError, SearchProvider};
use crate::config::SearchConfig;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How requests to the API are authenticated
///
/// `AccessToken` is used as given and never refreshed. Once it expires every
/// call fails with a 401 from the API until the process restarts with a new
/// token, so long-running deployments should prefer `ApiKey`.
#[derive(Clone)]
pub enum Credentials {
    ApiKey(String),
    AccessToken(String),
}

impl Credentials {
    /// Picks the first credential the environment provides, API key first.
    pub fn discover(config: &SearchConfig) -> Result<Self, SearchError> {
        if let Some(key) = &config.api_key {
            return Ok(Credentials::ApiKey(key.clone()));
        }
        if let Some(token) = &config.access_token {
            return Ok(Credentials::AccessToken(token.clone()));
        }
        Err(SearchError::NoCredentials)
    }

    fn kind(&self) -> &'static str {
        match self {
            Credentials::ApiKey(_) => "api_key",
            Credentials::AccessToken(_) => "access_token",
        }
    }
}

// Error body returned by Google APIs
#[derive(Deserialize)]
struct GoogleErrorResponse {
    error: GoogleError,
}

#[derive(Deserialize)]
struct GoogleError {
    #[serde(default)]
    message: Option<String>,
}

pub struct CustomSearchClient {
    client: Client,
    endpoint: String,
    credentials: Credentials,
    timeout: Duration,
}

impl CustomSearchClient {
    pub fn new(credentials: Credentials, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a client from config, failing when no credentials are available
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let credentials = Credentials::discover(config)?;
        Ok(Self::new(credentials, config.endpoint.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs)))
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials_kind(&self) -> &'static str {
        self.credentials.kind()
    }

    fn map_send_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout(self.timeout)
        } else {
            SearchError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl SearchProvider for CustomSearchClient {
    async fn list(
        &self,
        query: &str,
        site_id: &str,
        num: u32,
    ) -> Result<ProviderResponse, SearchError> {
        info!(query = %query, num, "Searching via Custom Search API");

        let num = num.to_string();
        let mut request = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .query(&[("q", query), ("cx", site_id), ("num", num.as_str())]);

        request = match &self.credentials {
            Credentials::ApiKey(key) => request.query(&[("key", key.as_str())]),
            Credentials::AccessToken(token) => request.bearer_auth(token),
        };

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let reason = error_reason(status, &body);
            warn!(status = status.as_u16(), reason = %reason, "Custom Search API returned an error");
            return Err(SearchError::Http {
                status: status.as_u16(),
                reason,
            });
        }

        debug!("Raw Custom Search response received");

        let parsed: ProviderResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        info!(
            count = parsed.items.as_ref().map_or(0, Vec::len),
            "Custom Search API call completed"
        );
        Ok(parsed)
    }
}

/// Human readable reason for a failed call: the API's own message when the
/// body carries one, otherwise the status text, otherwise the raw body.
fn error_reason(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<GoogleErrorResponse>(body)
        .ok()
        .and_then(|r| r.error.message)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| status.canonical_reason().map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server, credentials: Credentials) -> CustomSearchClient {
        CustomSearchClient::new(credentials, format!("{}/customsearch/v1", server.url()))
    }

    #[test]
    fn test_error_reason_prefers_api_message() {
        let body = r#"{"error":{"code":429,"message":"rate limited","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(error_reason(StatusCode::TOO_MANY_REQUESTS, body), "rate limited");
    }

    #[test]
    fn test_error_reason_falls_back_to_status_text() {
        assert_eq!(
            error_reason(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
        assert_eq!(
            error_reason(StatusCode::FORBIDDEN, r#"{"error":{"code":403}}"#),
            "Forbidden"
        );
    }

    #[test]
    fn test_discover_prefers_api_key() {
        let config = SearchConfig {
            cse_id: "engine".to_string(),
            api_key: Some("key".to_string()),
            access_token: Some("token".to_string()),
            endpoint: crate::config::DEFAULT_CSE_ENDPOINT.to_string(),
            timeout_secs: 5,
        };
        let client = CustomSearchClient::from_config(&config).unwrap();
        assert_eq!(client.credentials_kind(), "api_key");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_discover_without_credentials_fails() {
        let config = SearchConfig {
            cse_id: "engine".to_string(),
            api_key: None,
            access_token: None,
            endpoint: crate::config::DEFAULT_CSE_ENDPOINT.to_string(),
            timeout_secs: 10,
        };
        assert!(matches!(
            CustomSearchClient::from_config(&config),
            Err(SearchError::NoCredentials)
        ));
    }

    #[tokio::test]
    async fn test_list_sends_query_and_parses_items() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/customsearch/v1")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "rust lang".into()),
                Matcher::UrlEncoded("cx".into(), "engine-id".into()),
                Matcher::UrlEncoded("num".into(), "10".into()),
                Matcher::UrlEncoded("key".into(), "test-key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "kind": "customsearch#search",
                    "items": [
                        {"title": "A", "link": "http://a", "snippet": "s", "displayLink": "a"},
                        {"title": "B", "link": "http://b"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = client_for(&server, Credentials::ApiKey("test-key".to_string()));
        let response = client.list("rust lang", "engine-id", 10).await.unwrap();

        mock.assert_async().await;
        let items = response.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("A"));
        assert_eq!(items[1].snippet, None);
    }

    #[tokio::test]
    async fn test_list_uses_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/customsearch/v1")
            .match_query(Matcher::Any)
            .match_header("authorization", "Bearer token-123")
            .with_status(200)
            .with_body(r#"{"kind": "customsearch#search"}"#)
            .create_async()
            .await;

        let client = client_for(&server, Credentials::AccessToken("token-123".to_string()));
        let response = client.list("foo", "engine-id", 10).await.unwrap();

        mock.assert_async().await;
        assert!(response.items.is_none());
    }

    #[tokio::test]
    async fn test_list_reports_http_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/customsearch/v1")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"error":{"code":429,"message":"rate limited"}}"#)
            .create_async()
            .await;

        let client = client_for(&server, Credentials::ApiKey("test-key".to_string()));
        let err = client.list("foo", "engine-id", 10).await.unwrap_err();

        match err {
            SearchError::Http { status, reason } => {
                assert_eq!(status, 429);
                assert_eq!(reason, "rate limited");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_times_out_on_silent_server() {
        // Accepts connections and never writes a byte back.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = CustomSearchClient::new(
            Credentials::ApiKey("test-key".to_string()),
            format!("http://{}/customsearch/v1", addr),
        )
        .with_timeout(Duration::from_millis(100));

        let err = client.list("foo", "engine-id", 10).await.unwrap_err();
        server.abort();

        match err {
            SearchError::Timeout(after) => assert_eq!(after, Duration::from_millis(100)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_rejects_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/customsearch/v1")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = client_for(&server, Credentials::ApiKey("test-key".to_string()));
        let err = client.list("foo", "engine-id", 10).await.unwrap_err();

        assert!(matches!(err, SearchError::Parse(_)));
    }
}
