//! Timezone-aware datetime constructors
//!
//! Every constructor returns a `DateTime<FixedOffset>` carrying the local
//! offset at that instant, so stored timestamps are never naive.

use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};

pub type TzDateTime = DateTime<FixedOffset>;

/// Current local time.
pub fn now() -> TzDateTime {
    Local::now().fixed_offset()
}

/// Local time for a Unix timestamp in seconds.
pub fn from_timestamp(secs: i64) -> Option<TzDateTime> {
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(&Local).fixed_offset())
}

/// Parse `input` with a strftime-style `format`.
///
/// A parsed offset is converted to local time; a naive result is interpreted
/// as local time.
pub fn parse_from_str(input: &str, format: &str) -> Result<TzDateTime, String> {
    if let Ok(aware) = DateTime::parse_from_str(input, format) {
        return Ok(aware.with_timezone(&Local).fixed_offset());
    }
    let naive = NaiveDateTime::parse_from_str(input, format).map_err(|e| e.to_string())?;
    localize(naive)
}

/// Join a calendar date and a wall-clock time in the local timezone.
pub fn combine(date: NaiveDate, time: NaiveTime) -> Result<TzDateTime, String> {
    localize(date.and_time(time))
}

/// Parse an ISO 8601 / RFC 3339 timestamp.
///
/// Offsets are honoured and converted to local time; a timestamp without an
/// offset is interpreted as local time.
pub fn from_iso(input: &str) -> Result<TzDateTime, String> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(input) {
        return Ok(aware.with_timezone(&Local).fixed_offset());
    }
    parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| format!("invalid ISO 8601 timestamp '{}': {}", input, e))
}

fn localize(naive: NaiveDateTime) -> Result<TzDateTime, String> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.fixed_offset()),
        // DST overlap: take the earlier instant
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.fixed_offset()),
        LocalResult::None => Err(format!("{} does not exist in the local timezone", naive)),
    }
}
