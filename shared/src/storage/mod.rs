//! Storage traits and implementations.
//!
//! The `LogStore` trait is the interface the transport layer talks to, so that
//! handlers do not depend on a concrete store.

pub mod log_store;

pub use log_store::{InMemoryLogStore, LogStore};
