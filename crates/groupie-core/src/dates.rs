//! Upstream date normalization.
//!
//! The tour API encodes dates as `DD-MM-YYYY`. A leading `*` marks a date
//! that has been announced but not confirmed; the marker never affects
//! equality.

use chrono::NaiveDate;
use thiserror::Error;

/// Prefix the upstream puts on announced-only dates.
pub const APPROXIMATE_MARKER: char = '*';

const LAYOUT: &str = "%d-%m-%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("malformed date {0:?}: expected DD-MM-YYYY")]
    Layout(String),

    #[error("no such calendar date: {0:?}")]
    Calendar(String),
}

/// Remove a single leading approximation marker, if present.
pub fn strip_marker(raw: &str) -> &str {
    raw.strip_prefix(APPROXIMATE_MARKER).unwrap_or(raw)
}

// chrono accepts single-digit fields, so the shape is checked up front.
fn has_layout(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a raw upstream date into a calendar date.
pub fn parse(raw: &str) -> Result<NaiveDate, DateParseError> {
    let text = strip_marker(raw);
    if !has_layout(text) {
        return Err(DateParseError::Layout(raw.to_string()));
    }
    NaiveDate::parse_from_str(text, LAYOUT).map_err(|_| DateParseError::Calendar(raw.to_string()))
}

/// Render a calendar date in the upstream layout, without marker.
pub fn format(date: NaiveDate) -> String {
    date.format(LAYOUT).to_string()
}

/// True when both strings parse and name the same calendar day.
pub fn same_date(a: &str, b: &str) -> bool {
    matches!((parse(a), parse(b)), (Ok(x), Ok(y)) if x == y)
}
