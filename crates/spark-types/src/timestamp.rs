//! Timestamp handling at the storage and query boundaries.
//!
//! Stored timestamps are fixed-width UTC strings with microsecond precision,
//! so lexical order on the TEXT column matches chronological order.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Years that render as exactly four digits in the storage format.
const STORABLE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bad timestamp: {0:?}")]
pub struct TimestampError(pub String);

/// Render a timestamp the way it is written to the database.
pub fn to_storage(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Read a timestamp back from the database.
pub fn from_storage(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TimestampError(raw.to_string()))
}

/// Parse a client-supplied ISO-8601 lower bound.
///
/// A trailing `Z` is normalized to `+00:00` first. Values without an offset
/// are taken as UTC, and a bare date means midnight. The UTC year must lie in
/// 0..=9999 so the bound compares correctly against stored timestamps.
pub fn parse_client(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let parsed = parse_iso(raw).ok_or_else(|| TimestampError(raw.to_string()))?;
    if !STORABLE_YEARS.contains(&parsed.year()) {
        return Err(TimestampError(raw.to_string()));
    }
    Ok(parsed)
}

fn parse_iso(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    let normalized = match trimmed.strip_suffix('Z').or_else(|| trimmed.strip_suffix('z')) {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}
