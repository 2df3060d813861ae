//! Log record data model.
//!
//! Defines the `LogRecord` structure accepted by ingestion and returned by queries.

use super::timestamp::{self, null_as_default};
use crate::query::FilterKey;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Nested metadata attached to a log record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Identifier of the resource that owns `resourceId`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_resource_id: String,
}

/// A single log event.
///
/// Records are immutable once stored; the store hands out clones. Every string
/// field may be empty, and an empty value is compared like any other string
/// when filtering. An absent or `null` field decodes to its empty value.
///
/// # Example
///
/// ```
/// use shared::models::LogRecord;
/// use chrono::DateTime;
///
/// let json = r#"{
///     "level": "error",
///     "message": "Failed to connect to DB",
///     "resourceId": "server-1234",
///     "timestamp": "2023-09-15T08:00:00Z",
///     "traceId": "abc-xyz-123",
///     "spanId": "span-456",
///     "commit": "5e5342f",
///     "metadata": { "parentResourceId": "server-0987" }
/// }"#;
///
/// let record: LogRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.resource_id, "server-1234");
/// assert_eq!(record.metadata.parent_resource_id, "server-0987");
/// assert_eq!(
///     record.timestamp,
///     DateTime::parse_from_rfc3339("2023-09-15T08:00:00Z").unwrap()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Severity label, e.g. `error`. Free-form, compared case-sensitively.
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,

    /// The log message content.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    /// Identifier of the resource that emitted the log.
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_id: String,

    /// When the event occurred. The original UTC offset is preserved.
    ///
    /// Absent or `null` on the wire means [`zero_time`](super::zero_time).
    #[serde(
        default = "timestamp::zero_time",
        deserialize_with = "timestamp::deserialize"
    )]
    pub timestamp: DateTime<FixedOffset>,

    /// Distributed trace identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub trace_id: String,

    /// Span identifier within the trace.
    #[serde(default, deserialize_with = "null_as_default")]
    pub span_id: String,

    /// Commit hash of the emitting build.
    #[serde(default, deserialize_with = "null_as_default")]
    pub commit: String,

    /// Nested metadata.
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

impl LogRecord {
    /// Creates a record with the given level, message and timestamp.
    ///
    /// All identifier fields start out empty.
    ///
    /// # Example
    ///
    /// ```
    /// use shared::models::LogRecord;
    /// use chrono::DateTime;
    ///
    /// let ts = DateTime::parse_from_rfc3339("2023-09-10T01:00:00Z").unwrap();
    /// let record = LogRecord::new("error", "disk full", ts).with_resource_id("r1");
    /// assert_eq!(record.level, "error");
    /// assert_eq!(record.resource_id, "r1");
    /// assert!(record.trace_id.is_empty());
    /// ```
    #[must_use]
    pub fn new(
        level: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
            resource_id: String::new(),
            timestamp,
            trace_id: String::new(),
            span_id: String::new(),
            commit: String::new(),
            metadata: Metadata::default(),
        }
    }

    /// Sets the resource ID.
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = resource_id.into();
        self
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }

    /// Sets the span ID.
    #[must_use]
    pub fn with_span_id(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = span_id.into();
        self
    }

    /// Sets the commit hash.
    #[must_use]
    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = commit.into();
        self
    }

    /// Sets `metadata.parentResourceId`.
    #[must_use]
    pub fn with_parent_resource_id(mut self, parent_resource_id: impl Into<String>) -> Self {
        self.metadata.parent_resource_id = parent_resource_id.into();
        self
    }

    /// Returns the string field addressed by a filter key.
    ///
    /// Returns `None` for [`FilterKey::Timestamp`], which is not a string field.
    #[must_use]
    pub fn field(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Level => Some(&self.level),
            FilterKey::Message => Some(&self.message),
            FilterKey::ResourceId => Some(&self.resource_id),
            FilterKey::TraceId => Some(&self.trace_id),
            FilterKey::SpanId => Some(&self.span_id),
            FilterKey::Commit => Some(&self.commit),
            FilterKey::ParentResourceId => Some(&self.metadata.parent_resource_id),
            FilterKey::Timestamp => None,
        }
    }
}
