//! API route definitions.
//!
//! This module organizes all HTTP routes for the Logbook API server.

mod error;
mod health;
mod ingest;
mod query;

pub use error::ErrorResponse;
pub use health::health_routes;
pub use ingest::ingest_routes;
pub use query::query_routes;
