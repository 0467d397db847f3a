//! A handler that keeps whole records for assertions on structure.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::handler::{Handler, HandlerError};
use crate::level::Level;
use crate::log_record::Record;
use crate::value::Attr;

/// Handler that stores every record it receives, unformatted.
///
/// Unlike [`CaptureHandler`](crate::CaptureHandler) it accepts any level
/// and supports derivation by prepending attributes.
#[derive(Clone, Default)]
pub struct CollectingHandler {
    records: Arc<Mutex<Vec<Record>>>,
    prefix: Vec<Attr>,
}

impl CollectingHandler {
    /// Create a new empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of all records received so far.
    pub fn collected(&self) -> Vec<Record> {
        self.records.lock().clone()
    }
}

impl Handler for CollectingHandler {
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        let mut stored = Record::new(record.time(), record.level(), record.message());
        stored.add_attrs(self.prefix.iter().cloned());
        stored.add_attrs(record.attrs().cloned());
        self.records.lock().push(stored);
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        derived.prefix.extend(attrs);
        Arc::new(derived)
    }

    /// Groups are not modelled; the derived handler shares this one's buffer.
    fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
        Arc::new(self.clone())
    }
}
