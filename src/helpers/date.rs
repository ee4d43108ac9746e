//! Date and reading-time helpers

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Reading speed used for read-time estimates
const WORDS_PER_MINUTE: usize = 200;

/// Read time reported when a post has no body
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// Parse a source date (`2024-01-15`, `2024-01-15T10:00`, or RFC 3339)
pub fn parse_source_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.date_naive());
    }
    // Contentful date fields may omit seconds and carry a short offset
    for format in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(date) = DateTime::parse_from_str(raw, format) {
            return Some(date.date_naive());
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format date in full format (like "January 5, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Display form of a source date; unparseable input is returned unchanged
pub fn display_date(raw: &str) -> String {
    match parse_source_date(raw) {
        Some(date) => full_date(&date),
        None => {
            tracing::debug!("Keeping unparseable date {:?} as-is", raw);
            raw.to_string()
        }
    }
}

/// Estimated reading time for a body of text
pub fn read_time<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut saw_text = false;
    let words: usize = texts
        .into_iter()
        .inspect(|_| saw_text = true)
        .map(|text| text.split_whitespace().count())
        .sum();

    if !saw_text {
        return DEFAULT_READ_TIME.to_string();
    }

    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}
