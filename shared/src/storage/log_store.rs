//! Log storage trait and implementations.
//!
//! Provides the `LogStore` trait for abstracting log storage operations
//! and an `InMemoryLogStore` implementation backed by a `Vec`.

use crate::models::LogRecord;
use crate::query::{FilterSet, Matcher};
use std::sync::{Arc, PoisonError, RwLock};

/// Trait for log storage implementations.
///
/// Both operations always succeed: records arrive already decoded, and a
/// query that matches nothing returns an empty `Vec`.
/// Implementations must be thread-safe (Send + Sync).
pub trait LogStore: Send + Sync {
    /// Appends a record. It is visible to every query started afterwards.
    fn ingest(&self, record: LogRecord);

    /// Returns every stored record matching all filters, in insertion order.
    fn query(&self, filters: &FilterSet) -> Vec<LogRecord>;

    /// Returns the total number of stored records.
    fn count(&self) -> usize;
}

/// In-memory log store implementation.
///
/// Records live in a `Vec` protected by a `RwLock`: `ingest` takes the write
/// lock for a single push, `query` takes the read lock for one full scan, so
/// concurrent queries proceed in parallel and never observe a partial append.
///
/// The store grows without bound and nothing is persisted across restarts.
///
/// # Example
///
/// ```
/// use shared::storage::{InMemoryLogStore, LogStore};
/// use shared::query::FilterSet;
/// use shared::models::LogRecord;
/// use chrono::Utc;
///
/// let store = InMemoryLogStore::new();
///
/// store.ingest(LogRecord::new("info", "Test message", Utc::now().fixed_offset()));
///
/// let logs = store.query(&FilterSet::new());
/// assert_eq!(logs.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLogStore {
    logs: Arc<RwLock<Vec<LogRecord>>>,
}

impl InMemoryLogStore {
    /// Creates a new empty in-memory log store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            logs: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a new in-memory log store wrapped in an Arc.
    ///
    /// This is useful when sharing the store across multiple handlers.
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

// A panic while holding the lock cannot leave the Vec half-written, so a
// poisoned lock is still safe to use.
impl LogStore for InMemoryLogStore {
    fn ingest(&self, record: LogRecord) {
        let mut logs = self.logs.write().unwrap_or_else(PoisonError::into_inner);
        logs.push(record);
    }

    fn query(&self, filters: &FilterSet) -> Vec<LogRecord> {
        let matcher = Matcher::new(filters);

        let logs = self.logs.read().unwrap_or_else(PoisonError::into_inner);
        logs.iter()
            .filter(|record| matcher.matches(record))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.logs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
