//! In-memory handler that captures formatted records for test assertions.
//!
//! [`CaptureHandler`] renders every recognised record to a single line as it
//! arrives and appends it to a shared list. Tests install one clone as the
//! logging backend and keep another to [`read`](CaptureHandler::read) the
//! captured lines or [`reset`](CaptureHandler::reset) them between cases.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::formatter::{CaptureFormatter, RecordFormatter};
use crate::handler::{Handler, HandlerError};
use crate::level::Level;
use crate::log_record::Record;
use crate::value::Attr;

/// Handler that stores every recognised record as a formatted line.
///
/// Clones share the same line buffer.
#[derive(Clone)]
pub struct CaptureHandler {
    lines: Arc<Mutex<Vec<String>>>,
    formatter: Arc<dyn RecordFormatter>,
}

impl CaptureHandler {
    /// Create an empty handler using [`CaptureFormatter`].
    pub fn new() -> Self {
        Self::with_formatter(CaptureFormatter)
    }

    /// Create an empty handler rendering lines with `formatter`.
    pub fn with_formatter<F>(formatter: F) -> Self
    where
        F: RecordFormatter + 'static,
    {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            formatter: Arc::new(formatter),
        }
    }

    /// Discard every captured line.
    pub fn reset(&self) {
        *self.lines.lock() = Vec::new();
    }

    /// Return a snapshot of the captured lines in capture order.
    pub fn read(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Default for CaptureHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CaptureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureHandler")
            .field("lines", &self.len())
            .finish_non_exhaustive()
    }
}

impl Handler for CaptureHandler {
    /// Panics for any level other than DEBUG, INFO, WARN or ERROR.
    fn enabled(&self, level: Level) -> bool {
        if level.is_recognised() {
            true
        } else {
            panic!("CaptureHandler: unrecognised log level {level}")
        }
    }

    fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        let mut lines = self.lines.lock();
        let line = self.formatter.format(record);
        if record.level().is_recognised() {
            lines.push(line);
        }
        Ok(())
    }

    fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Handler> {
        unimplemented!("CaptureHandler does not support derived handlers (with_attrs)")
    }

    fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
        unimplemented!("CaptureHandler does not support attribute groups (with_group)")
    }
}
