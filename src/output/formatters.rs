//! Reusable formatting utilities for CLI output
//!
//! Timestamps, sizes, enum tags and free text used across multiple commands.

use serde::Serialize;

use crate::tz::TzDateTime;

/// Format a stored timestamp as local date/time with its offset.
///
/// # Example output
/// `2025-01-15 14:30 +09:00`
pub fn format_timestamp_local(ts: &TzDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M %:z").to_string()
}

/// Format a Unix timestamp (seconds) as local date/time, or "N/A".
pub fn format_unix_local(secs: Option<i64>) -> String {
    secs.and_then(crate::tz::from_timestamp)
        .map(|ts| format_timestamp_local(&ts))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// GraphQL tag of an optional enum value, or "--".
pub fn enum_tag<T: Serialize>(value: Option<&T>) -> String {
    value
        .and_then(|v| serde_json::to_value(v).ok())
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| "--".to_string())
}

/// Optional value as text, or "--".
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Drop HTML tags from AniList descriptions, turning `<br>` into newlines.
pub fn strip_html(text: &str) -> String {
    let text = text
        .replace("<br><br>", "\n")
        .replace("<br>", "\n")
        .replace("<br />", "\n");

    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Truncate to `max` characters, appending an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
