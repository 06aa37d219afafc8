//! AniList GraphQL response models
//!
//! Every model is a closed schema: unknown fields, wrong primitive types and
//! unrecognized enum tags are all rejected. Models are organized by the
//! resource kind they describe.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

mod common;
mod media;
mod search;
mod user;

pub use common::{MediaStatus, MediaType};
pub use media::Media;
pub use search::{MediaSummary, SearchPage};
pub use user::{MediaListCollection, MediaListGroup};

#[cfg(test)]
pub use common::{FuzzyDate, MediaFormat};
#[cfg(test)]
pub use user::MediaListStatus;

/// The resource kinds served by the cache.
///
/// This is the single registry of kinds: storage tables and upstream root
/// fields are derived from it rather than discovered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Single media record looked up by id
    Media,
    /// A user's merged anime + manga lists
    UserLists,
    /// First page of a title search
    Search,
}

impl ResourceKind {
    /// All kinds, in table-creation order.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Media,
        ResourceKind::UserLists,
        ResourceKind::Search,
    ];

    /// Short human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Media => "media",
            ResourceKind::UserLists => "user-lists",
            ResourceKind::Search => "search",
        }
    }

    /// SQLite table holding entries of this kind
    pub fn table(self) -> &'static str {
        match self {
            ResourceKind::Media => "media_files",
            ResourceKind::UserLists => "user_files",
            ResourceKind::Search => "search_files",
        }
    }

    /// Field of the GraphQL `data` object carrying this kind
    pub fn root_field(self) -> &'static str {
        match self {
            ResourceKind::Media => "Media",
            ResourceKind::UserLists => "MediaListCollection",
            ResourceKind::Search => "Page",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A top-level model that can be cached.
pub trait Resource: Serialize + DeserializeOwned {
    const KIND: ResourceKind;
}

impl Resource for Media {
    const KIND: ResourceKind = ResourceKind::Media;
}

impl Resource for MediaListCollection {
    const KIND: ResourceKind = ResourceKind::UserLists;
}

impl Resource for SearchPage {
    const KIND: ResourceKind = ResourceKind::Search;
}

/// Parse a stored JSON payload into its typed model.
pub fn parse<T: Resource>(raw: &str) -> Result<T, ValidationError> {
    serde_json::from_str(raw).map_err(|e| ValidationError::new(T::KIND, e.to_string()))
}

/// Validate the kind's root field of an upstream `data` object.
pub fn from_data<T: Resource>(data: &serde_json::Value) -> Result<T, ValidationError> {
    let field = T::KIND.root_field();
    let root = data
        .get(field)
        .ok_or_else(|| ValidationError::new(T::KIND, format!("missing field `{}`", field)))?;
    T::deserialize(root).map_err(|e| ValidationError::new(T::KIND, e.to_string()))
}

/// Deserialize a field that must be present but may be `null`.
///
/// Plain `Option` fields treat an absent key as `None`; routing them through
/// `deserialize_with` makes the key itself mandatory.
pub(crate) fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
