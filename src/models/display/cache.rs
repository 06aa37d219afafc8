//! Cache status display model

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cache::{CacheStats, KindStats};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::formatters::{format_size, format_timestamp_local};
use crate::output::{Formattable, json, table};

/// Per-kind row of `cache status`
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct KindStatsDisplay {
    #[tabled(rename = "KIND")]
    pub kind: String,

    #[tabled(rename = "TABLE")]
    pub table: String,

    #[tabled(rename = "ENTRIES")]
    pub entries: usize,

    #[tabled(skip)]
    pub size_bytes: usize,

    #[tabled(rename = "SIZE")]
    pub size: String,

    #[tabled(rename = "OLDEST FETCH")]
    pub oldest_fetch: String,

    #[tabled(rename = "NEWEST FETCH")]
    pub newest_fetch: String,
}

impl From<&KindStats> for KindStatsDisplay {
    fn from(stats: &KindStats) -> Self {
        let when = |ts: Option<&crate::tz::TzDateTime>| {
            ts.map(format_timestamp_local)
                .unwrap_or_else(|| "--".to_string())
        };
        Self {
            kind: stats.kind.name().to_string(),
            table: stats.kind.table().to_string(),
            entries: stats.entries,
            size_bytes: stats.size_bytes,
            size: format_size(stats.size_bytes),
            oldest_fetch: when(stats.oldest_fetch.as_ref()),
            newest_fetch: when(stats.newest_fetch.as_ref()),
        }
    }
}

/// Everything `cache status` reports
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatusDisplay {
    pub path: String,
    pub total_entries: usize,
    pub total_size_bytes: usize,
    pub kinds: Vec<KindStatsDisplay>,
}

impl CacheStatusDisplay {
    pub fn new(path: &Path, stats: &CacheStats) -> Self {
        Self {
            path: path.display().to_string(),
            total_entries: stats.total_entries(),
            total_size_bytes: stats.total_size_bytes(),
            kinds: stats.kinds.iter().map(KindStatsDisplay::from).collect(),
        }
    }
}

impl Formattable for CacheStatusDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => json::format_json(self)?,
            OutputFormat::Table => table::format_table(&self.kinds),
            OutputFormat::Pretty => {
                let mut out = format!("{}\n", "Cache Status".bold());
                out.push_str("────────────────────────────────────────\n");
                out.push_str(&format!("Location:       {}\n", self.path.cyan()));
                out.push_str(&format!("Entries:        {}\n", self.total_entries));
                out.push_str(&format!(
                    "Total size:     {}\n",
                    format_size(self.total_size_bytes)
                ));
                for kind in &self.kinds {
                    out.push_str(&format!(
                        "\n{} {}\n",
                        kind.kind.bold(),
                        format!("({})", kind.table).dimmed()
                    ));
                    out.push_str(&format!("  Entries:      {}\n", kind.entries));
                    if kind.entries > 0 {
                        out.push_str(&format!("  Size:         {}\n", kind.size));
                        out.push_str(&format!("  Oldest fetch: {}\n", kind.oldest_fetch));
                        out.push_str(&format!("  Newest fetch: {}\n", kind.newest_fetch));
                    }
                }
                out.trim_end().to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStorage;
    use crate::client::models::ResourceKind;
    use crate::tz;
    use tempfile::TempDir;

    fn status_with_one_entry() -> CacheStatusDisplay {
        let dir = TempDir::new().unwrap();
        let store = CacheStorage::open_at(dir.path()).unwrap();
        store
            .put(ResourceKind::Media, "21", r#"{"id":21}"#, tz::now())
            .unwrap();
        CacheStatusDisplay::new(store.path(), &store.stats().unwrap())
    }

    #[test]
    fn test_status_totals() {
        let status = status_with_one_entry();
        assert_eq!(status.total_entries, 1);
        assert_eq!(status.total_size_bytes, 9);
        assert_eq!(status.kinds.len(), 3);
        assert_eq!(status.kinds[0].kind, "media");
        assert_eq!(status.kinds[1].oldest_fetch, "--");
    }

    #[test]
    fn test_table_lists_every_kind() {
        let out = status_with_one_entry().format(OutputFormat::Table).unwrap();
        assert!(out.contains("media_files"));
        assert!(out.contains("user_files"));
        assert!(out.contains("search_files"));
    }

    #[test]
    fn test_json_reports_path() {
        let out = status_with_one_entry().format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["data"]["path"].as_str().unwrap().ends_with("cache.db"));
        assert_eq!(value["data"]["kinds"][0]["entries"], 1);
    }
}
