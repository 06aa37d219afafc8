//! Mock GraphQL client for testing
//!
//! Answers the three known queries from canned payloads without making real
//! network calls, and records every request for assertions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::GraphQlApi;
use super::fixtures;
use super::models::{MediaType, ResourceKind};
use super::queries::{MEDIA_QUERY, SEARCH_QUERY, USER_QUERY};
use crate::error::{Result, UpstreamError};

/// Mock upstream client.
///
/// Configure payloads via builder methods, then hand it to a proxy.
///
/// # Example
/// ```ignore
/// let mock = MockGraphQlClient::new().with_media(21, fixtures::media_json(21));
/// let data = mock.request(MEDIA_QUERY, json!({"mediaId": 21})).await?;
/// assert_eq!(mock.call_counts().await.media, 1);
/// ```
#[derive(Default)]
pub struct MockGraphQlClient {
    /// `Media` payloads by id
    media: HashMap<i64, Value>,
    /// `MediaListCollection` payloads by (lowercased user name, media type)
    user_lists: HashMap<(String, MediaType), Value>,
    /// `Page` payloads by (search text, media type)
    search_pages: HashMap<(String, MediaType), Value>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<UpstreamError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
    /// Hold every response this long before answering
    delay: Option<Duration>,
}

/// Tracks upstream call counts per resource kind
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub media: usize,
    pub user_lists: usize,
    pub search: usize,
}

impl CallCounts {
    /// Get total number of upstream calls made.
    pub fn total(&self) -> usize {
        self.media + self.user_lists + self.search
    }
}

/// A captured upstream request.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub kind: ResourceKind,
    pub variables: Value,
}

impl MockGraphQlClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` as the `Media` for `id`.
    pub fn with_media(mut self, id: i64, payload: Value) -> Self {
        self.media.insert(id, payload);
        self
    }

    /// Serve `payload` as the `MediaListCollection` of `user_name` for `media_type`.
    pub fn with_user_lists(
        mut self,
        user_name: &str,
        media_type: MediaType,
        payload: Value,
    ) -> Self {
        self.user_lists
            .insert((user_name.to_lowercase(), media_type), payload);
        self
    }

    /// Serve `payload` as the `Page` for `search` + `media_type`.
    pub fn with_search(mut self, search: &str, media_type: MediaType, payload: Value) -> Self {
        self.search_pages
            .insert((search.to_string(), media_type), payload);
        self
    }

    /// Fail the next request with `error`.
    pub fn with_error(self, error: UpstreamError) -> Self {
        Self {
            error: Arc::new(Mutex::new(Some(error))),
            ..self
        }
    }

    /// Answer every request only after `delay`, so concurrent callers overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    fn media_type_var(variables: &Value) -> Result<MediaType> {
        let media_type = variables
            .get("type")
            .and_then(Value::as_str)
            .and_then(|t| t.parse::<MediaType>().ok())
            .ok_or_else(|| UpstreamError::InvalidResponse("missing `type` variable".into()))?;
        Ok(media_type)
    }

    fn str_var<'a>(variables: &'a Value, name: &str) -> Result<&'a str> {
        let value = variables.get(name).and_then(Value::as_str).ok_or_else(|| {
            UpstreamError::InvalidResponse(format!("missing `{}` variable", name))
        })?;
        Ok(value)
    }
}

#[async_trait]
impl GraphQlApi for MockGraphQlClient {
    async fn request(&self, query: &str, variables: Value) -> Result<Value> {
        let kind = match query {
            MEDIA_QUERY => ResourceKind::Media,
            USER_QUERY => ResourceKind::UserLists,
            SEARCH_QUERY => ResourceKind::Search,
            _ => return Err(UpstreamError::InvalidResponse("unknown query".into()).into()),
        };

        {
            let mut counts = self.call_count.lock().await;
            match kind {
                ResourceKind::Media => counts.media += 1,
                ResourceKind::UserLists => counts.user_lists += 1,
                ResourceKind::Search => counts.search += 1,
            }
        }
        self.captured_requests.lock().await.push(CapturedRequest {
            kind,
            variables: variables.clone(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        let payload = match kind {
            ResourceKind::Media => {
                let id = variables
                    .get("mediaId")
                    .and_then(Value::as_i64)
                    .ok_or_else(|| UpstreamError::InvalidResponse("missing `mediaId`".into()))?;
                self.media.get(&id).cloned()
            }
            ResourceKind::UserLists => {
                let user = Self::str_var(&variables, "userName")?.to_lowercase();
                let media_type = Self::media_type_var(&variables)?;
                self.user_lists.get(&(user, media_type)).cloned()
            }
            ResourceKind::Search => {
                let search = Self::str_var(&variables, "search")?.to_string();
                let media_type = Self::media_type_var(&variables)?;
                self.search_pages.get(&(search, media_type)).cloned()
            }
        };

        // AniList answers unknown ids and users with a 404
        let payload = payload.ok_or(UpstreamError::Status(404))?;
        Ok(fixtures::data(kind.root_field(), payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_serves_media() {
        let mock = MockGraphQlClient::new().with_media(21, json!({"id": 21}));
        let data = mock
            .request(MEDIA_QUERY, json!({"mediaId": 21}))
            .await
            .unwrap();
        assert_eq!(data, json!({"Media": {"id": 21}}));
        assert_eq!(mock.call_counts().await.media, 1);
    }

    #[tokio::test]
    async fn test_mock_unknown_media_is_404() {
        let mock = MockGraphQlClient::new();
        let err = mock
            .request(MEDIA_QUERY, json!({"mediaId": 1}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockGraphQlClient::new()
            .with_media(1, json!({"id": 1}))
            .with_error(UpstreamError::Status(502));

        assert!(mock.request(MEDIA_QUERY, json!({"mediaId": 1})).await.is_err());
        assert!(mock.request(MEDIA_QUERY, json!({"mediaId": 1})).await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_delay_overlaps_concurrent_requests() {
        let mock = MockGraphQlClient::new()
            .with_media(1, json!({"id": 1}))
            .with_delay(Duration::from_millis(50));

        let (a, b) = tokio::join!(
            mock.request(MEDIA_QUERY, json!({"mediaId": 1})),
            mock.request(MEDIA_QUERY, json!({"mediaId": 1})),
        );
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(mock.call_counts().await.media, 2);
    }
}
