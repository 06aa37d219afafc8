//! Upstream AniList GraphQL client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub mod anilist;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod queries;

pub use anilist::AniListClient;
#[cfg(test)]
pub use mock::MockGraphQlClient;

/// A GraphQL endpoint that answers one query at a time.
#[async_trait]
pub trait GraphQlApi: Send + Sync {
    /// Run `query` with `variables` and return the response's `data` object.
    ///
    /// Fails on a non-success HTTP status or a non-empty `errors` array.
    async fn request(&self, query: &str, variables: Value) -> Result<Value>;
}
