//! Filtering of log records.
//!
//! A [`FilterSet`] maps recognized [`FilterKey`]s to string values. Each key has
//! a fixed [`MatchStrategy`]; all present keys must match (logical AND).
//!
//! | key | strategy |
//! |---|---|
//! | `level`, `resourceId`, `traceId`, `spanId`, `commit`, `metadata.parentResourceId` | exact |
//! | `message` | substring |
//! | `timestamp` | `T <= x <= T + 24h` |
//!
//! # Example
//!
//! ```
//! use shared::models::LogRecord;
//! use shared::query::{matches, FilterSet};
//! use chrono::DateTime;
//!
//! let filters: FilterSet =
//!     serde_json::from_str(r#"{"level": "error", "message": "connect"}"#).unwrap();
//! let ts = DateTime::parse_from_rfc3339("2023-09-20T00:00:00Z").unwrap();
//!
//! assert!(matches(&LogRecord::new("error", "Failed to connect", ts), &filters));
//! assert!(!matches(&LogRecord::new("error", "disk full", ts), &filters));
//! ```

mod filter;
mod matcher;

pub use filter::{FilterKey, FilterSet, MatchStrategy, UnknownFilterKey};
pub use matcher::{matches, Matcher, TimeWindow, WINDOW_HOURS};
