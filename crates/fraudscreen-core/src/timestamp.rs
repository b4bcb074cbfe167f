//! Lenient timestamp parsing.
//!
//! Clients send either RFC 3339 instants (`2025-03-01T10:00:00Z`) or naive
//! date-times without an offset (`2025-03-01T10:00:00.123`). Naive values
//! are read as UTC.

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(ts);
    }
    raw.parse::<DateTime>()
        .and_then(|dt| dt.to_zoned(TimeZone::UTC))
        .map(|zoned| zoned.timestamp())
        .map_err(|e| CoreError::InvalidTimestamp(format!("{raw}: {e}")))
}

/// Serde adapter for an optional, leniently parsed timestamp field.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
