//! AniList GraphQL client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::GraphQlApi;
use crate::error::{ConfigError, Result, UpstreamError};

/// Public AniList GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://graphql.anilist.co";

/// Upper bound on a single upstream request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// AniList allows 90 requests per minute per client
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 90;

/// AniList GraphQL client
pub struct AniListClient {
    http: HttpClient,
    endpoint: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

impl AniListClient {
    /// Create a client for `endpoint`.
    ///
    /// `timeout` caps each request; `requests_per_minute` throttles outbound
    /// calls client-side and must be non-zero.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        requests_per_minute: u32,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("mediacache/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let per_minute = NonZeroU32::new(requests_per_minute).ok_or_else(|| {
            ConfigError::Invalid("rate_limit_per_minute must be greater than zero".to_string())
        })?;
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_minute(per_minute)));

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            rate_limiter,
        })
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQlApi for AniListClient {
    async fn request(&self, query: &str, variables: Value) -> Result<Value> {
        self.rate_limiter.until_ready().await;

        log::debug!("POST {} variables={}", self.endpoint, variables);

        let body = GraphQlRequest {
            query,
            variables: &variables,
        };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Upstream returned {} for variables={}", status, variables);
            return Err(UpstreamError::Status(status.as_u16()).into());
        }

        let text = response.text().await.map_err(|e| {
            UpstreamError::InvalidResponse(format!("Failed to read response: {}", e))
        })?;

        let parsed: GraphQlResponse = serde_json::from_str(&text).map_err(|e| {
            UpstreamError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        if let Some(errors) = parsed.errors
            && !errors.is_empty()
        {
            return Err(UpstreamError::GraphQl(errors).into());
        }

        match parsed.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(
                UpstreamError::InvalidResponse("Response has no `data` object".to_string()).into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> AniListClient {
        AniListClient::new(server.url(), Duration::from_secs(5), 600).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = AniListClient::new(
            DEFAULT_ENDPOINT,
            DEFAULT_TIMEOUT,
            DEFAULT_RATE_LIMIT_PER_MINUTE,
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_zero_rate_limit_rejected() {
        let result = AniListClient::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, 0);
        assert!(matches!(result, Err(Error::Config(ConfigError::Invalid(_)))));
    }

    #[tokio::test]
    async fn test_request_returns_data() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "query": "query { Media { id } }",
                "variables": { "mediaId": 21 }
            })))
            .with_status(200)
            .with_body(r#"{"data": {"Media": {"id": 21}}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let data = client
            .request("query { Media { id } }", json!({ "mediaId": 21 }))
            .await
            .unwrap();

        assert_eq!(data, json!({"Media": {"id": 21}}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.request("query", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(UpstreamError::Status(500))));
    }

    #[tokio::test]
    async fn test_status_checked_before_errors_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(404)
            .with_body(
                r#"{"errors": [{"message": "Not Found.", "status": 404}], "data": {"Media": null}}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .request("query", json!({"mediaId": 0}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Upstream(UpstreamError::Status(404))));
    }

    #[tokio::test]
    async fn test_graphql_errors_on_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"data": {"Page": null}, "errors": [{"message": "Invalid type"}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.request("query", json!({})).await.unwrap_err();
        match err {
            Error::Upstream(UpstreamError::GraphQl(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("Expected GraphQl error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_errors_array_is_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"data": {"Page": {}}, "errors": []}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let data = client.request("query", json!({})).await.unwrap();
        assert_eq!(data, json!({"Page": {}}));
    }

    #[tokio::test]
    async fn test_missing_data_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.request("query", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(UpstreamError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.request("query", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(UpstreamError::InvalidResponse(_))));
    }
}
