//! Test helpers shared across unit and integration tests.
//!
//! Compiled for this crate's own tests and, with the `test-util` feature,
//! exported so integration tests can build records with fixed timestamps.

pub mod collecting_handler;

use chrono::DateTime;

use crate::level::Level;
use crate::log_record::Record;

pub use collecting_handler::CollectingHandler;

/// Build a record stamped with the RFC 3339 timestamp `time`.
///
/// # Panics
///
/// Panics if `time` is not a valid RFC 3339 timestamp.
pub fn record_at(time: &str, level: Level, message: &str) -> Record {
    let time = DateTime::parse_from_rfc3339(time).expect("valid RFC 3339 timestamp");
    Record::new(time, level, message)
}
