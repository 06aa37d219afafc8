//! User media-list models from the `MediaListCollection` query

use serde::{Deserialize, Serialize};

/// Watching/reading status of a list group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaListStatus {
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
}

/// A single list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MediaList {
    pub media_id: i64,
}

/// Entries of one status.
///
/// Both keys must be present even when `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaListGroup {
    #[serde(deserialize_with = "super::required")]
    pub entries: Option<Vec<Option<MediaList>>>,

    #[serde(deserialize_with = "super::required")]
    pub status: Option<MediaListStatus>,
}

/// All list groups of a user, anime groups before manga groups once merged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaListCollection {
    #[serde(deserialize_with = "super::required")]
    pub lists: Option<Vec<Option<MediaListGroup>>>,
}

impl MediaListCollection {
    /// Concatenate the groups of several collections, preserving order.
    pub fn merge(collections: impl IntoIterator<Item = MediaListCollection>) -> Self {
        let lists = collections
            .into_iter()
            .flat_map(|c| c.lists.unwrap_or_default())
            .collect();
        Self { lists: Some(lists) }
    }

    /// Non-null groups
    pub fn groups(&self) -> impl Iterator<Item = &MediaListGroup> {
        self.lists.iter().flatten().flatten()
    }
}

impl MediaListGroup {
    /// Media ids of non-null entries
    pub fn media_ids(&self) -> Vec<i64> {
        self.entries
            .iter()
            .flatten()
            .flatten()
            .map(|e| e.media_id)
            .collect()
    }
}
