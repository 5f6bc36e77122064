//! Timestamp normalization.
//!
//! Log records carry timestamps as RFC 3339 strings (`2025-11-21T07:11:39.534Z`),
//! zone-naive ISO strings (`2024-01-01T10:00:00`), bare dates, or epoch
//! milliseconds. Everything is normalized to a `DateTime<FixedOffset>`;
//! zone-naive input is read as UTC.
//!
//! Two policies sit on top of that:
//!
//! - the summary pipeline keeps the offset and compares absolute instants;
//! - the export pipeline converts to UTC and drops the offset
//!   ([`strip_offset`]), sorts on that naive instant, and renders it with
//!   [`EXPORT_DATETIME_FORMAT`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use thiserror::Error;

/// Fixed-width layout of export timestamps
pub const EXPORT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,
    #[error("unrecognized timestamp format: {0}")]
    Malformed(String),
    #[error("epoch milliseconds out of range: {0}")]
    OutOfRange(i64),
    #[error("timestamp must be a string or a number")]
    UnsupportedType,
}

/// Parse a textual timestamp
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    Err(TimestampError::Malformed(s.to_string()))
}

/// Parse a timestamp field that may be a string or epoch milliseconds
pub fn timestamp_from_value(value: &Value) -> Result<DateTime<FixedOffset>, TimestampError> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => {
            let ms = match n.as_i64() {
                Some(ms) => ms,
                None => n.as_f64().map(|f| f as i64).ok_or(TimestampError::UnsupportedType)?,
            };
            DateTime::from_timestamp_millis(ms)
                .map(|dt| dt.fixed_offset())
                .ok_or(TimestampError::OutOfRange(ms))
        }
        _ => Err(TimestampError::UnsupportedType),
    }
}

/// Absence-returning variant of [`parse_timestamp`]
pub fn normalize_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    parse_timestamp(raw).ok()
}

/// Convert to UTC and drop the offset
pub fn strip_offset(timestamp: &DateTime<FixedOffset>) -> NaiveDateTime {
    timestamp.naive_utc()
}

pub fn format_export_datetime(timestamp: &NaiveDateTime) -> String {
    timestamp.format(EXPORT_DATETIME_FORMAT).to_string()
}
