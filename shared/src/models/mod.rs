//! Data models for Logbook.

pub mod log;
pub mod timestamp;

pub use log::{LogRecord, Metadata};
pub use timestamp::{parse_timestamp, zero_time, InvalidTimestamp};
