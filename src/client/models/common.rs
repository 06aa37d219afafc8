//! Types shared by several AniList models

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::tz::{self, TzDateTime};

/// Type of media; anime or manga
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Anime,
    Manga,
}

impl MediaType {
    /// GraphQL enum tag
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Anime => "ANIME",
            MediaType::Manga => "MANGA",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    /// Exact, case-sensitive match on the GraphQL tag
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANIME" => Ok(MediaType::Anime),
            "MANGA" => Ok(MediaType::Manga),
            other => Err(format!(
                "media_type must be 'ANIME' or 'MANGA', got '{}'",
                other
            )),
        }
    }
}

/// The format the media was released in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
    Manga,
    Novel,
    OneShot,
}

/// The current releasing status of the media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaSeason {
    Winter,
    Spring,
    Summer,
    Fall,
}

/// Source material the media was adapted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaSource {
    Original,
    Manga,
    LightNovel,
    VisualNovel,
    VideoGame,
    Other,
    Novel,
    Doujinshi,
    Anime,
    WebNovel,
    LiveAction,
    Game,
    Comic,
    MultimediaProject,
    PictureBook,
}

/// Date that allows for incomplete values (fuzzy)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuzzyDate {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
}

impl FuzzyDate {
    /// Local midnight of the date, when year, month and day are all known
    pub fn start_of_day(&self) -> Option<TzDateTime> {
        let date = NaiveDate::from_ymd_opt(
            i32::try_from(self.year?).ok()?,
            u32::try_from(self.month?).ok()?,
            u32::try_from(self.day?).ok()?,
        )?;
        tz::combine(date, NaiveTime::MIN).ok()
    }
}

impl fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => write!(f, "{:04}-{:02}-{:02}", y, m, d),
            (Some(y), Some(m), None) => write!(f, "{:04}-{:02}", y, m),
            (Some(y), None, _) => write!(f, "{:04}", y),
            _ => f.write_str("--"),
        }
    }
}

/// Official titles of the media in various languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaTitle {
    /// Romanization of the native title
    pub romaji: Option<String>,
    /// Official English title
    pub english: Option<String>,
    /// Title in its native language
    pub native: Option<String>,
}

impl MediaTitle {
    /// English title if present, else romaji, else native
    pub fn preferred(&self) -> Option<&str> {
        self.english
            .as_deref()
            .or(self.romaji.as_deref())
            .or(self.native.as_deref())
    }
}

/// Cover image urls. Search results only request `large` and `medium`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaCoverImage {
    #[serde(rename = "extraLarge")]
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    /// Average `#RRGGBB` color of the cover
    pub color: Option<String>,
}

/// Pagination metadata attached to connections and pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PageInfo {
    /// Total item count. Upstream does not guarantee accuracy.
    pub total: Option<i64>,
    pub per_page: Option<i64>,
    pub current_page: Option<i64>,
    pub last_page: Option<i64>,
    pub has_next_page: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_str_exact() {
        assert_eq!("ANIME".parse::<MediaType>(), Ok(MediaType::Anime));
        assert_eq!("MANGA".parse::<MediaType>(), Ok(MediaType::Manga));
        assert!("anime".parse::<MediaType>().is_err());
        assert!("FOO".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_unknown_enum_tag_rejected() {
        let result = serde_json::from_str::<MediaFormat>(r#""TV_SPECIAL""#);
        assert!(result.is_err());

        let ok: MediaFormat = serde_json::from_str(r#""TV_SHORT""#).unwrap();
        assert_eq!(ok, MediaFormat::TvShort);
    }

    #[test]
    fn test_status_tags() {
        let status: MediaStatus = serde_json::from_str(r#""NOT_YET_RELEASED""#).unwrap();
        assert_eq!(status, MediaStatus::NotYetReleased);
    }

    #[test]
    fn test_fuzzy_date_display() {
        let full = FuzzyDate {
            year: Some(2017),
            month: Some(3),
            day: Some(24),
        };
        assert_eq!(full.to_string(), "2017-03-24");

        let year_only = FuzzyDate {
            year: Some(1998),
            month: None,
            day: None,
        };
        assert_eq!(year_only.to_string(), "1998");
        assert_eq!(FuzzyDate::default().to_string(), "--");
    }

    #[test]
    fn test_fuzzy_date_start_of_day() {
        let full = FuzzyDate {
            year: Some(2017),
            month: Some(3),
            day: Some(24),
        };
        let start = full.start_of_day().unwrap();
        assert_eq!(start.format("%Y-%m-%d %H:%M").to_string(), "2017-03-24 00:00");

        let partial = FuzzyDate {
            year: Some(2017),
            month: Some(3),
            day: None,
        };
        assert!(partial.start_of_day().is_none());

        let invalid = FuzzyDate {
            year: Some(2017),
            month: Some(2),
            day: Some(30),
        };
        assert!(invalid.start_of_day().is_none());
    }

    #[test]
    fn test_fuzzy_date_rejects_extra_field() {
        let result = serde_json::from_str::<FuzzyDate>(r#"{"year": 2000, "era": "CE"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_preferred_title_fallback() {
        let title = MediaTitle {
            romaji: Some("Shingeki no Kyojin".to_string()),
            english: None,
            native: Some("進撃の巨人".to_string()),
        };
        assert_eq!(title.preferred(), Some("Shingeki no Kyojin"));
    }
}
