//! Timestamp parsing for DWML start-valid-time values
//!
//! NDFD writes each sample time as an ISO 8601 local time with a trailing
//! UTC offset, e.g. `2015-01-13T07:00:00-05:00`. Some producers drop the
//! colon from the offset (`-0500`). The offset is normalized back to
//! `±HH:MM` before RFC 3339 parsing so both spellings are accepted.

use crate::{Error, Result};
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::LazyLock;

static START_VALID_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})([+-]\d{2}):?(\d{2})$")
        .expect("start-valid-time pattern is valid")
});

/// Parse a start-valid-time value into a timestamp that keeps its offset
///
/// # Arguments
///
/// * `text` - Raw element text, surrounding whitespace allowed
///
/// # Returns
///
/// The parsed timestamp, or a document format error naming the text
pub fn parse_start_valid_time(text: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = text.trim();
    let captures = START_VALID_TIME.captures(trimmed).ok_or_else(|| {
        Error::document_format(format!(
            "invalid start-valid-time '{}' (expected 'YYYY-MM-DDTHH:MM:SS±HHMM')",
            trimmed
        ))
    })?;

    let normalized = format!("{}{}:{}", &captures[1], &captures[2], &captures[3]);
    DateTime::parse_from_rfc3339(&normalized).map_err(|e| {
        Error::document_format_with_source(
            format!("invalid start-valid-time '{}'", trimmed),
            e,
        )
    })
}
