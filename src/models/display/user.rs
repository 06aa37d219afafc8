//! User list display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::models::{MediaListCollection, MediaListGroup};
use crate::error::Result;
use crate::output::formatters::{enum_tag, truncate};
use crate::output::{Formattable, json, table};

/// Widest media-id column in table output
const IDS_CHARS: usize = 60;

/// One list group per row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ListGroupDisplay {
    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "ENTRIES")]
    pub entries: usize,

    #[tabled(rename = "MEDIA IDS")]
    pub media_ids: String,
}

impl From<&MediaListGroup> for ListGroupDisplay {
    fn from(group: &MediaListGroup) -> Self {
        let ids = group.media_ids();
        Self {
            status: enum_tag(group.status.as_ref()),
            entries: ids.len(),
            media_ids: truncate(&join_ids(&ids), IDS_CHARS),
        }
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn pretty(lists: &MediaListCollection) -> String {
    let groups: Vec<&MediaListGroup> = lists.groups().collect();
    if groups.is_empty() {
        return "No lists found.".to_string();
    }

    let total: usize = groups.iter().map(|g| g.media_ids().len()).sum();
    let mut out = format!(
        "{} ({} groups, {} entries)\n",
        "Media lists".bold(),
        groups.len(),
        total
    );
    for group in groups {
        let ids = group.media_ids();
        out.push_str(&format!(
            "\n{} {}\n",
            enum_tag(group.status.as_ref()).cyan().bold(),
            format!("({})", ids.len()).dimmed()
        ));
        if !ids.is_empty() {
            out.push_str(&format!("  {}\n", join_ids(&ids)));
        }
    }
    out.trim_end().to_string()
}

impl Formattable for MediaListCollection {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => json::format_json(self)?,
            OutputFormat::Table => {
                let rows: Vec<ListGroupDisplay> =
                    self.groups().map(ListGroupDisplay::from).collect();
                table::format_table(&rows)
            }
            OutputFormat::Pretty => pretty(self),
        })
    }
}
