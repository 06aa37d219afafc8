//! Media record display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::models::{Media, MediaStatus, MediaType};
use crate::error::Result;
use crate::output::formatters::{enum_tag, format_unix_local, or_dash, strip_html, truncate};
use crate::output::{Formattable, json, table};
use crate::tz;

/// Longest description shown in pretty output
const DESCRIPTION_CHARS: usize = 400;

/// One-line summary of a media record, used for recommendation rows.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MediaDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "TYPE")]
    pub media_type: String,

    #[tabled(rename = "FORMAT")]
    pub format: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Episodes for anime, chapters for manga
    #[tabled(rename = "LENGTH")]
    pub length: String,

    #[tabled(rename = "SCORE")]
    pub score: String,

    #[tabled(rename = "START")]
    pub start: String,
}

impl From<&Media> for MediaDisplay {
    fn from(media: &Media) -> Self {
        Self {
            id: media.id,
            title: title_of(media),
            media_type: enum_tag(media.media_type.as_ref()),
            format: enum_tag(media.format.as_ref()),
            status: enum_tag(media.status.as_ref()),
            length: length_of(media),
            score: or_dash(media.average_score),
            start: or_dash(media.start_date.as_ref()),
        }
    }
}

fn title_of(media: &Media) -> String {
    media
        .title
        .as_ref()
        .and_then(|t| t.preferred())
        .unwrap_or("(untitled)")
        .to_string()
}

fn length_of(media: &Media) -> String {
    match media.media_type {
        Some(MediaType::Manga) => match media.chapters {
            Some(ch) => format!("{} ch", ch),
            None => "--".to_string(),
        },
        _ => match media.episodes {
            Some(ep) => format!("{} ep", ep),
            None => "--".to_string(),
        },
    }
}

fn joined(values: Option<&Vec<Option<String>>>) -> String {
    let values: Vec<&str> = values
        .into_iter()
        .flatten()
        .flatten()
        .map(String::as_str)
        .collect();
    if values.is_empty() {
        "--".to_string()
    } else {
        values.join(", ")
    }
}

fn studio_names(media: &Media) -> String {
    let names: Vec<&str> = media
        .studios
        .iter()
        .flat_map(|s| s.nodes.iter().flatten())
        .flatten()
        .map(|s| s.name.as_str())
        .collect();
    if names.is_empty() {
        "--".to_string()
    } else {
        names.join(", ")
    }
}

fn recommendation_rows(media: &Media) -> Vec<MediaDisplay> {
    media.recommended().map(MediaDisplay::from).collect()
}

/// Detail rows for the table view
fn detail_fields(media: &Media) -> Vec<(&'static str, String)> {
    let row = MediaDisplay::from(media);
    vec![
        ("ID", row.id.to_string()),
        ("MAL ID", or_dash(media.id_mal)),
        ("TITLE", row.title),
        (
            "NATIVE",
            or_dash(media.title.as_ref().and_then(|t| t.native.as_deref())),
        ),
        ("TYPE", row.media_type),
        ("FORMAT", row.format),
        ("STATUS", row.status),
        ("SOURCE", enum_tag(media.source.as_ref())),
        ("SEASON", season_of(media)),
        ("START", row.start),
        ("END", or_dash(media.end_date.as_ref())),
        ("LENGTH", row.length),
        ("SCORE", row.score),
        ("POPULARITY", or_dash(media.popularity)),
        ("GENRES", joined(media.genres.as_ref())),
        ("STUDIOS", studio_names(media)),
        ("UPDATED", format_unix_local(media.updated_at)),
        ("URL", or_dash(media.site_url.as_deref())),
    ]
}

fn season_of(media: &Media) -> String {
    match (media.season.as_ref(), media.season_year) {
        (Some(season), Some(year)) => format!("{} {}", enum_tag(Some(season)), year),
        (None, Some(year)) => year.to_string(),
        (Some(season), None) => enum_tag(Some(season)),
        (None, None) => "--".to_string(),
    }
}

/// Whole days until an unreleased media starts, if its start date is known
fn days_until_start(media: &Media) -> Option<i64> {
    if media.status != Some(MediaStatus::NotYetReleased) {
        return None;
    }
    let start = media.start_date.as_ref()?.start_of_day()?;
    let days = (start - tz::now()).num_days();
    (days >= 0).then_some(days)
}

fn pretty(media: &Media) -> String {
    let row = MediaDisplay::from(media);
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", row.title.bold(), format!("#{}", row.id).dimmed()));
    if let Some(native) = media.title.as_ref().and_then(|t| t.native.as_deref()) {
        out.push_str(&format!("{}\n", native.dimmed()));
    }
    out.push('\n');

    out.push_str(&format!(
        "{} · {} · {} · {}\n",
        row.media_type.cyan(),
        row.format,
        row.status,
        row.length
    ));
    out.push_str(&format!("Score:    {}\n", row.score.green()));
    out.push_str(&format!(
        "Aired:    {} → {}\n",
        row.start,
        or_dash(media.end_date.as_ref())
    ));
    if let Some(days) = days_until_start(media) {
        out.push_str(&format!("Premieres in {} days\n", days).yellow().to_string());
    }
    out.push_str(&format!("Season:   {}\n", season_of(media)));
    out.push_str(&format!("Genres:   {}\n", joined(media.genres.as_ref())));
    out.push_str(&format!("Studios:  {}\n", studio_names(media)));

    if let Some(desc) = media.description.as_deref() {
        out.push('\n');
        out.push_str(&truncate(&strip_html(desc), DESCRIPTION_CHARS));
        out.push('\n');
    }

    let recs = recommendation_rows(media);
    if !recs.is_empty() {
        out.push_str(&format!("\n{}\n", "Recommendations".bold()));
        for rec in recs {
            out.push_str(&format!(
                "  {} {} {}\n",
                format!("{:>7}", rec.id).dimmed(),
                rec.title,
                format!("({})", rec.format).dimmed()
            ));
        }
    }

    if let Some(url) = media.site_url.as_deref() {
        out.push_str(&format!("\n{}\n", url.underline()));
    }

    out.trim_end().to_string()
}

impl Formattable for Media {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => json::format_json(self)?,
            OutputFormat::Table => {
                let mut out = table::format_fields(&detail_fields(self));
                let recs = recommendation_rows(self);
                if !recs.is_empty() {
                    out.push_str("\n\nRecommendations\n");
                    out.push_str(&table::format_table(&recs));
                }
                out
            }
            OutputFormat::Pretty => pretty(self),
        })
    }
}
