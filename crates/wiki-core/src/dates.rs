//! Timestamp formats shared by responders and the recent-changes page

use chrono::{DateTime, TimeZone, Timelike};

// Everything after the hour; the hour runs 1-24 and chrono has no such specifier.
const RECENT_CHANGES_TAIL_FORMAT: &str = "%M:%S %a, %b %d, %Y";

/// HTTP headers and feeds: `Tue, 4 Mar 2025 13:05:09 +0000`.
pub const RFC_COMPLIANT_DATE_FORMAT: &str = "%a, %-d %b %Y %H:%M:%S %z";

/// Recent-changes rows: `13:05:09 Tue, Mar 04, 2025`, midnight as hour `24`.
pub fn format_recent_changes_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let hour = match date.hour() {
        0 => 24,
        h => h,
    };
    format!("{hour:02}:{}", date.format(RECENT_CHANGES_TAIL_FORMAT))
}

pub fn format_rfc_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.format(RFC_COMPLIANT_DATE_FORMAT).to_string()
}
