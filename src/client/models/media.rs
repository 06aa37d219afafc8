//! Full media record as returned by the `Media(id:)` query

use serde::{Deserialize, Serialize};

use super::common::{
    FuzzyDate, MediaCoverImage, MediaFormat, MediaSeason, MediaSource, MediaStatus, MediaTitle,
    MediaType, PageInfo,
};

/// Anime or manga.
///
/// Recommended media reuse this shape without their own `recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Media {
    /// AniList id of the media
    pub id: i64,

    /// MyAnimeList id, when known
    pub id_mal: Option<i64>,

    pub title: Option<MediaTitle>,

    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,

    pub format: Option<MediaFormat>,

    pub status: Option<MediaStatus>,

    pub description: Option<String>,

    pub start_date: Option<FuzzyDate>,

    pub end_date: Option<FuzzyDate>,

    pub season: Option<MediaSeason>,

    pub season_year: Option<i64>,

    /// Episode count (anime only)
    pub episodes: Option<i64>,

    /// Episode length in minutes (anime only)
    pub duration: Option<i64>,

    /// Chapter count (manga only)
    pub chapters: Option<i64>,

    /// Volume count (manga only)
    pub volumes: Option<i64>,

    /// ISO 3166-1 alpha-2 country code
    pub country_of_origin: Option<String>,

    pub is_licensed: Option<bool>,

    pub source: Option<MediaSource>,

    pub trailer: Option<MediaTrailer>,

    /// Unix timestamp of the last upstream modification
    pub updated_at: Option<i64>,

    pub cover_image: Option<MediaCoverImage>,

    pub banner_image: Option<String>,

    pub genres: Option<Vec<Option<String>>>,

    pub synonyms: Option<Vec<Option<String>>>,

    /// Weighted average of user scores
    pub average_score: Option<i64>,

    pub mean_score: Option<i64>,

    pub popularity: Option<i64>,

    pub favourites: Option<i64>,

    pub tags: Option<Vec<Option<MediaTag>>>,

    pub studios: Option<StudioConnection>,

    pub is_adult: Option<bool>,

    pub external_links: Option<Vec<Option<MediaExternalLink>>>,

    pub rankings: Option<Vec<Option<MediaRank>>>,

    pub site_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<RecommendationConnection>,
}

/// Trailer hosted on a video site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaTrailer {
    pub id: Option<String>,
    /// youtube or dailymotion
    pub site: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MediaTag {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Relevance of the tag, 0-100
    pub rank: Option<i64>,
    pub is_general_spoiler: Option<bool>,
    pub is_media_spoiler: Option<bool>,
    pub is_adult: Option<bool>,
    /// Submitting user, if any
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct StudioConnection {
    pub nodes: Option<Vec<Option<Studio>>>,
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Studio {
    pub id: i64,
    pub name: String,
    pub is_animation_studio: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExternalLinkType {
    Info,
    Streaming,
    Social,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MediaExternalLink {
    pub id: i64,
    pub url: Option<String>,
    pub site: String,
    pub site_id: Option<i64>,
    #[serde(rename = "type")]
    pub link_type: Option<ExternalLinkType>,
    pub language: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub notes: Option<String>,
    pub is_disabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaRankType {
    Rated,
    Popular,
}

/// Ranking of the media in a particular time span and format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MediaRank {
    pub id: i64,
    pub rank: i64,
    #[serde(rename = "type")]
    pub rank_type: MediaRankType,
    pub format: MediaFormat,
    pub year: Option<i64>,
    pub season: Option<MediaSeason>,
    /// Ranking covers all years
    pub all_time: Option<bool>,
    /// e.g. "highest rated all time"
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationConnection {
    pub nodes: Option<Vec<Option<Recommendation>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub rating: Option<i64>,
    pub media_recommendation: Option<Box<Media>>,
}

impl Media {
    /// Recommended media, skipping null nodes
    pub fn recommended(&self) -> impl Iterator<Item = &Media> {
        self.recommendations
            .iter()
            .flat_map(|conn| conn.nodes.iter().flatten())
            .flatten()
            .filter_map(|rec| rec.media_recommendation.as_deref())
    }
}
