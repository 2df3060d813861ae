//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use shared::storage::{InMemoryLogStore, LogStore};
use std::sync::Arc;

/// Application state shared across all request handlers.
///
/// Cloning is cheap: clones share the same store.
#[derive(Clone)]
pub struct AppState {
    /// The log storage backend.
    log_store: Arc<dyn LogStore>,
}

impl AppState {
    /// Creates a new application state with the given store.
    pub fn new(log_store: Arc<dyn LogStore>) -> Self {
        Self { log_store }
    }

    /// Creates a new application state with a fresh in-memory store.
    #[must_use]
    pub fn with_in_memory_store() -> Self {
        Self::new(InMemoryLogStore::new_shared())
    }

    /// Returns a reference to the log store.
    #[must_use]
    pub fn log_store(&self) -> &dyn LogStore {
        self.log_store.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_in_memory_store()
    }
}
