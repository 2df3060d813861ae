//! Filter keys and filter sets.
//!
//! A filter set maps recognized keys to a single string value. Key names that
//! are not recognized are kept aside for diagnostics and never take part in
//! matching.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a filter value is compared against a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Case-sensitive full-string equality.
    Exact,
    /// Case-sensitive containment.
    Substring,
    /// The filter value is an RFC 3339 instant `T`; matches `T <= x <= T + 24h`.
    Window,
}

/// One of the recognized filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    /// `level`
    Level,
    /// `message`
    Message,
    /// `resourceId`
    ResourceId,
    /// `timestamp`
    Timestamp,
    /// `traceId`
    TraceId,
    /// `spanId`
    SpanId,
    /// `commit`
    Commit,
    /// `metadata.parentResourceId`
    ParentResourceId,
}

impl FilterKey {
    /// Every recognized key, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Level,
        Self::Message,
        Self::ResourceId,
        Self::Timestamp,
        Self::TraceId,
        Self::SpanId,
        Self::Commit,
        Self::ParentResourceId,
    ];

    /// Returns the key's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Message => "message",
            Self::ResourceId => "resourceId",
            Self::Timestamp => "timestamp",
            Self::TraceId => "traceId",
            Self::SpanId => "spanId",
            Self::Commit => "commit",
            Self::ParentResourceId => "metadata.parentResourceId",
        }
    }

    /// Returns the comparison used for this key.
    #[must_use]
    pub const fn strategy(self) -> MatchStrategy {
        match self {
            Self::Message => MatchStrategy::Substring,
            Self::Timestamp => MatchStrategy::Window,
            Self::Level
            | Self::ResourceId
            | Self::TraceId
            | Self::SpanId
            | Self::Commit
            | Self::ParentResourceId => MatchStrategy::Exact,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a key name is not one of the recognized filter keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter key: {0}")]
pub struct UnknownFilterKey(pub String);

impl FromStr for FilterKey {
    type Err = UnknownFilterKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFilterKey(s.to_string()))
    }
}

/// A set of filters combined with logical AND.
///
/// Deserializes from a JSON object whose values are strings. An empty set
/// matches every record.
///
/// # Example
///
/// ```
/// use shared::query::{FilterKey, FilterSet};
///
/// let filters: FilterSet =
///     serde_json::from_str(r#"{"level": "error", "bogus": "x"}"#).unwrap();
///
/// assert_eq!(filters.get(FilterKey::Level), Some("error"));
/// assert_eq!(filters.len(), 1);
/// assert_eq!(filters.ignored_keys(), ["bogus".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct FilterSet {
    filters: BTreeMap<FilterKey, String>,
    ignored: Vec<String>,
}

impl FilterSet {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, replacing any previous value for the same key.
    #[must_use]
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.filters.insert(key, value.into());
        self
    }

    /// Adds a filter by wire name. Unrecognized names are recorded as ignored.
    #[must_use]
    pub fn with_raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_raw(key.into(), value.into());
        self
    }

    fn insert_raw(&mut self, key: String, value: String) {
        match key.parse::<FilterKey>() {
            Ok(key) => {
                self.filters.insert(key, value);
            }
            Err(UnknownFilterKey(name)) => self.ignored.push(name),
        }
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.filters.get(&key).map(String::as_str)
    }

    /// Iterates over the recognized filters.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.filters.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Number of recognized filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if no recognized filter is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Key names that were supplied but not recognized.
    #[must_use]
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }
}

impl From<BTreeMap<String, String>> for FilterSet {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut set = Self::new();
        for (key, value) in raw {
            set.insert_raw(key, value);
        }
        set
    }
}

impl From<FilterSet> for BTreeMap<String, String> {
    fn from(set: FilterSet) -> Self {
        set.filters
            .into_iter()
            .map(|(key, value)| (key.as_str().to_string(), value))
            .collect()
    }
}

impl FromIterator<(FilterKey, String)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (FilterKey, String)>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
            ignored: Vec::new(),
        }
    }
}
