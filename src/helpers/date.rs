//! Date helper functions

use chrono::{DateTime, NaiveDate};

/// Format an ISO-8601 date string for display (like "January 15, 2024").
///
/// Anything that does not parse falls back to the raw string, so a malformed
/// date in the index degrades to showing what the generator published.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %-d, %Y").to_string();
    }

    raw.to_string()
}
