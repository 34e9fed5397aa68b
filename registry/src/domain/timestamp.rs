//! Command-file timestamps
//!
//! Timestamps are written as `yyyy-MM-dd'T'HH:mm` with no offset and are
//! interpreted in the process's local time zone, both when parsed and when
//! formatted back into report lines.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// strftime pattern for `yyyy-MM-dd'T'HH:mm`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a command-file timestamp in the local time zone.
///
/// Returns `None` when the text does not match the pattern or names a local
/// time that does not exist (a DST gap). Ambiguous local times resolve to the
/// earlier instant.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT).ok()?;
    Local.from_local_datetime(&naive).earliest()
}

/// Format a timestamp for a report line
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
