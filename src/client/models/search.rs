//! Search page returned by the `Page { media(search:) }` query

use serde::{Deserialize, Serialize};

use super::common::{
    FuzzyDate, MediaCoverImage, MediaFormat, MediaStatus, MediaTitle, MediaType, PageInfo,
};

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SearchPage {
    pub page_info: Option<PageInfo>,
    pub media: Option<Vec<Option<MediaSummary>>>,
}

/// The subset of media fields requested by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MediaSummary {
    pub id: i64,
    pub title: Option<MediaTitle>,
    pub cover_image: Option<MediaCoverImage>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub format: Option<MediaFormat>,
    pub status: Option<MediaStatus>,
    pub average_score: Option<i64>,
    pub start_date: Option<FuzzyDate>,
}

impl SearchPage {
    /// Non-null results in upstream order
    pub fn results(&self) -> impl Iterator<Item = &MediaSummary> {
        self.media.iter().flatten().flatten()
    }
}
