//! Search result display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::models::{MediaSummary, SearchPage};
use crate::error::Result;
use crate::output::formatters::{enum_tag, or_dash};
use crate::output::{Formattable, json, table};

/// One search hit per row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SearchResultDisplay {
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

    #[tabled(rename = "SCORE")]
    pub score: String,

    #[tabled(rename = "START")]
    pub start: String,
}

impl From<&MediaSummary> for SearchResultDisplay {
    fn from(media: &MediaSummary) -> Self {
        Self {
            id: media.id,
            title: media
                .title
                .as_ref()
                .and_then(|t| t.preferred())
                .unwrap_or("(untitled)")
                .to_string(),
            media_type: enum_tag(media.media_type.as_ref()),
            format: enum_tag(media.format.as_ref()),
            status: enum_tag(media.status.as_ref()),
            score: or_dash(media.average_score),
            start: or_dash(media.start_date.as_ref()),
        }
    }
}

fn page_summary(page: &SearchPage) -> Option<String> {
    let info = page.page_info.as_ref()?;
    let more = if info.has_next_page == Some(true) {
        ", more available"
    } else {
        ""
    };
    Some(format!(
        "Page {} of {} ({} total{})",
        or_dash(info.current_page),
        or_dash(info.last_page),
        or_dash(info.total),
        more
    ))
}

fn pretty(page: &SearchPage) -> String {
    let rows: Vec<SearchResultDisplay> = page.results().map(SearchResultDisplay::from).collect();
    if rows.is_empty() {
        return "No results found.".to_string();
    }

    let mut out = String::new();
    for row in &rows {
        out.push_str(&format!(
            "{} {}\n        {} · {} · {} · score {}\n",
            format!("{:>7}", row.id).dimmed(),
            row.title.bold(),
            row.format,
            row.status,
            row.start,
            row.score.green()
        ));
    }
    if let Some(summary) = page_summary(page) {
        out.push_str(&format!("\n{}", summary.dimmed()));
    }
    out.trim_end().to_string()
}

impl Formattable for SearchPage {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => json::format_json(self)?,
            OutputFormat::Table => {
                let rows: Vec<SearchResultDisplay> =
                    self.results().map(SearchResultDisplay::from).collect();
                let mut out = table::format_table(&rows);
                if let Some(summary) = page_summary(self) {
                    out.push('\n');
                    out.push_str(&summary);
                }
                out
            }
            OutputFormat::Pretty => pretty(self),
        })
    }
}
