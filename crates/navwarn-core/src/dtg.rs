//! Date-time groups (`DDHHMMZ MON YY`) as printed in bulletin cancellation
//! lines.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parses a date-time group such as `"311200Z MAR 24"` or
/// `"011530Z JAN 2025"` into a UTC timestamp.
///
/// Two-digit years follow chrono's `%y` pivot (`00`-`68` are 20YY). Month
/// names are matched case-insensitively. Returns `None` for any malformed
/// field or an impossible calendar date.
#[must_use]
pub fn parse_dtg(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%d%H%MZ %b %y")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%d%H%MZ %b %Y"))
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
