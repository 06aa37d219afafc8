//! Read-through proxy in front of the upstream GraphQL API
//!
//! Each flow looks up its natural key, fetches and validates from upstream on
//! a miss, stores the validated payload, and always answers by re-parsing the
//! stored entry.

use std::future::Future;
use std::sync::Arc;

use serde_json::json;

use super::key::{media_key, search_key, user_key};
use super::storage::CacheStorage;
use crate::client::GraphQlApi;
use crate::client::models::{
    Media, MediaListCollection, MediaType, Resource, SearchPage, from_data, parse,
};
use crate::client::queries::{MEDIA_QUERY, SEARCH_PER_PAGE, SEARCH_QUERY, USER_QUERY};
use crate::error::{CacheError, Error, Result};
use crate::tz;

/// Read-through cache over any `GraphQlApi` implementation.
///
/// Shares one store handle across requests. The store lock is never held
/// across an await.
pub struct MediaProxy<C: GraphQlApi> {
    client: Arc<C>,
    store: Arc<CacheStorage>,
}

impl<C: GraphQlApi> MediaProxy<C> {
    pub fn new(client: C, store: CacheStorage) -> Self {
        Self {
            client: Arc::new(client),
            store: Arc::new(store),
        }
    }

    /// Get the upstream client
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn store(&self) -> &CacheStorage {
        &self.store
    }

    /// Media record by AniList id.
    pub async fn media(&self, id: i64) -> Result<Media> {
        let key = media_key(id);
        self.read_through(&key, || async move {
            let data = self
                .client
                .request(MEDIA_QUERY, json!({ "mediaId": id }))
                .await?;
            Ok(from_data::<Media>(&data)?)
        })
        .await
    }

    /// A user's anime and manga lists, merged anime first.
    ///
    /// User names are case-insensitive: `Alice` and `alice` share an entry.
    pub async fn user_lists(&self, user_name: &str) -> Result<MediaListCollection> {
        let key = user_key(user_name);
        self.read_through(&key, || async move {
            let (anime, manga) = futures::try_join!(
                self.fetch_user_lists(user_name, MediaType::Anime),
                self.fetch_user_lists(user_name, MediaType::Manga),
            )?;
            Ok(MediaListCollection::merge([anime, manga]))
        })
        .await
    }

    /// First page of a title search.
    ///
    /// `media_type` must be exactly `ANIME` or `MANGA`; anything else is
    /// rejected before the store or upstream is touched.
    pub async fn search(&self, query: &str, media_type: &str) -> Result<SearchPage> {
        let media_type: MediaType = media_type.parse().map_err(Error::InvalidRequest)?;
        let key = search_key(query, media_type);
        self.read_through(&key, || async move {
            let variables = json!({
                "search": query,
                "page": 1,
                "perPage": SEARCH_PER_PAGE,
                "type": media_type,
            });
            let data = self.client.request(SEARCH_QUERY, variables).await?;
            Ok(from_data::<SearchPage>(&data)?)
        })
        .await
    }

    /// Close the store.
    ///
    /// If another handle to the store is still alive the connection is left
    /// to close on drop.
    pub fn shutdown(self) -> Result<()> {
        match Arc::try_unwrap(self.store) {
            Ok(store) => Ok(store.close()?),
            Err(_) => {
                log::warn!("Cache store still shared at shutdown, not closing explicitly");
                Ok(())
            }
        }
    }

    async fn fetch_user_lists(
        &self,
        user_name: &str,
        media_type: MediaType,
    ) -> Result<MediaListCollection> {
        let data = self
            .client
            .request(USER_QUERY, json!({ "userName": user_name, "type": media_type }))
            .await?;
        Ok(from_data::<MediaListCollection>(&data)?)
    }

    /// Shared shape of every flow.
    ///
    /// `fetch` must return an already validated model; it only runs on a miss.
    async fn read_through<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T>
    where
        T: Resource,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let kind = T::KIND;
        let entry = match self.store.get(kind, key)? {
            Some(entry) => {
                log::debug!(
                    "Cache hit: {} '{}' (fetched {})",
                    kind,
                    entry.key,
                    entry.fetched_at.to_rfc3339()
                );
                entry
            }
            None => {
                log::debug!("Cache miss: {} '{}'", kind, key);
                let validated = fetch().await.inspect_err(|e| {
                    log::warn!("Upstream fetch failed for {} '{}': {}", kind, key, e);
                })?;
                let payload = serde_json::to_string(&validated)?;
                self.store.put(kind, key, &payload, tz::now())?;
                self.store
                    .get(kind, key)?
                    .ok_or_else(|| CacheError::Missing {
                        kind,
                        key: key.to_string(),
                    })?
            }
        };

        Ok(parse::<T>(&entry.payload)?)
    }
}
