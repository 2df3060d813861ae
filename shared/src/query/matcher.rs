//! Filter evaluation against log records.

use super::filter::{FilterKey, FilterSet, MatchStrategy};
use crate::models::{parse_timestamp, InvalidTimestamp, LogRecord};
use chrono::{DateTime, Duration, FixedOffset};

/// Length of the window opened by a `timestamp` filter, in hours.
pub const WINDOW_HOURS: i64 = 24;

/// Inclusive time window `[start, start + 24h]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<FixedOffset>,
    // `None` when `start + 24h` is beyond the representable range.
    end: Option<DateTime<FixedOffset>>,
}

impl TimeWindow {
    /// Opens a window at `start`.
    #[must_use]
    pub fn starting_at(start: DateTime<FixedOffset>) -> Self {
        Self {
            start,
            end: start.checked_add_signed(Duration::hours(WINDOW_HOURS)),
        }
    }

    /// Parses an RFC 3339 instant and opens a window at it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimestamp`] if `value` is not RFC 3339.
    pub fn parse(value: &str) -> Result<Self, InvalidTimestamp> {
        parse_timestamp(value).map(Self::starting_at)
    }

    /// Returns `true` if `instant` lies within the window, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        instant >= self.start && self.end.map_or(true, |end| instant <= end)
    }
}

#[derive(Debug)]
enum Predicate<'a> {
    Exact { key: FilterKey, value: &'a str },
    Contains { key: FilterKey, value: &'a str },
    // `None` if the filter value did not parse; matches nothing.
    Window(Option<TimeWindow>),
}

impl Predicate<'_> {
    fn holds(&self, record: &LogRecord) -> bool {
        match self {
            Self::Exact { key, value } => record.field(*key) == Some(*value),
            Self::Contains { key, value } => {
                record.field(*key).is_some_and(|field| field.contains(*value))
            }
            Self::Window(window) => window.is_some_and(|w| w.contains(record.timestamp)),
        }
    }
}

/// A filter set prepared for evaluation against many records.
///
/// Timestamp values are parsed once here rather than once per record.
///
/// # Example
///
/// ```
/// use shared::models::LogRecord;
/// use shared::query::{FilterKey, FilterSet, Matcher};
/// use chrono::DateTime;
///
/// let filters = FilterSet::new()
///     .with(FilterKey::Level, "error")
///     .with(FilterKey::Timestamp, "2023-09-10T00:00:00Z");
/// let matcher = Matcher::new(&filters);
///
/// let ts = DateTime::parse_from_rfc3339("2023-09-10T01:00:00Z").unwrap();
/// assert!(matcher.matches(&LogRecord::new("error", "disk full", ts)));
/// assert!(!matcher.matches(&LogRecord::new("info", "ok", ts)));
/// ```
#[derive(Debug)]
pub struct Matcher<'a> {
    predicates: Vec<Predicate<'a>>,
}

impl<'a> Matcher<'a> {
    /// Compiles a filter set.
    #[must_use]
    pub fn new(filters: &'a FilterSet) -> Self {
        let predicates = filters
            .iter()
            .map(|(key, value)| match key.strategy() {
                MatchStrategy::Exact => Predicate::Exact { key, value },
                MatchStrategy::Substring => Predicate::Contains { key, value },
                MatchStrategy::Window => Predicate::Window(
                    TimeWindow::parse(value)
                        .inspect_err(|e| {
                            tracing::debug!(
                                filter = %key,
                                value,
                                error = %e,
                                "Timestamp filter is not RFC 3339, no record can match"
                            );
                        })
                        .ok(),
                ),
            })
            .collect();

        Self { predicates }
    }

    /// Returns `true` if the record satisfies every filter.
    #[must_use]
    pub fn matches(&self, record: &LogRecord) -> bool {
        self.predicates.iter().all(|p| p.holds(record))
    }
}

/// Evaluates a filter set against a single record.
///
/// Prefer [`Matcher`] when testing many records against the same filters.
#[must_use]
pub fn matches(record: &LogRecord, filters: &FilterSet) -> bool {
    Matcher::new(filters).matches(record)
}
