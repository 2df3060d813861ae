//! Logbook Shared Library
//!
//! This crate contains the log record model, the filter engine and the
//! in-memory log store used by the Logbook API server and CLI.
//!
//! # Modules
//!
//! - [`models`] - The log record data model
//! - [`query`] - Filter sets and record matching
//! - [`storage`] - Storage trait and the in-memory implementation
//!
//! # Example
//!
//! ```
//! use shared::models::LogRecord;
//! use shared::query::{FilterKey, FilterSet};
//! use shared::storage::{InMemoryLogStore, LogStore};
//! use chrono::DateTime;
//!
//! let store = InMemoryLogStore::new();
//! let ts = DateTime::parse_from_rfc3339("2023-09-10T01:00:00Z").unwrap();
//! store.ingest(LogRecord::new("error", "disk full", ts).with_resource_id("r1"));
//! store.ingest(LogRecord::new("info", "ok", ts).with_resource_id("r1"));
//!
//! let errors = store.query(&FilterSet::new().with(FilterKey::Level, "error"));
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].message, "disk full");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod models;
pub mod query;
pub mod storage;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde;
pub use serde_json;
