//! RFC 3339 timestamp parsing and the serde helpers used by [`LogRecord`].
//!
//! Parsing is stricter than [`DateTime::parse_from_rfc3339`]: the date and
//! time must be separated by an uppercase `T`, and a UTC designator must be an
//! uppercase `Z`. A space separator or lowercase `t`/`z` is rejected.
//!
//! [`LogRecord`]: super::LogRecord

use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;

/// Seconds from `0001-01-01T00:00:00Z` to the Unix epoch.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// Error returned for a value that is not a strict RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not an RFC 3339 timestamp")]
pub struct InvalidTimestamp(pub String);

/// Parses a strict RFC 3339 timestamp, keeping its UTC offset.
///
/// # Errors
///
/// Returns [`InvalidTimestamp`] if `value` is not RFC 3339 with a `T`
/// separator and an uppercase `Z` (if any).
///
/// # Example
///
/// ```
/// use shared::models::parse_timestamp;
///
/// assert!(parse_timestamp("2023-09-15T10:00:00+02:00").is_ok());
/// assert!(parse_timestamp("2023-09-15 10:00:00Z").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, InvalidTimestamp> {
    let invalid = || InvalidTimestamp(value.to_string());

    if value.as_bytes().get(10) != Some(&b'T') || value.ends_with('z') {
        return Err(invalid());
    }
    DateTime::parse_from_rfc3339(value).map_err(|_| invalid())
}

/// The instant a record gets when it carries no timestamp: `0001-01-01T00:00:00Z`.
#[must_use]
pub fn zero_time() -> DateTime<FixedOffset> {
    DateTime::from_timestamp(ZERO_TIME_SECS, 0)
        .unwrap_or_default()
        .fixed_offset()
}

/// Deserializes a timestamp string; `null` becomes [`zero_time`].
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => parse_timestamp(&value).map_err(de::Error::custom),
        None => Ok(zero_time()),
    }
}

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
