//! Handler trait implemented by record sinks.

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::level::Level;
use crate::log_record::Record;
use crate::value::Attr;

/// Errors a handler may report from [`Handler::handle`].
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The handler refused or failed to process the record.
    #[error("handler failed: {0}")]
    Failed(String),
    /// Underlying I/O error while emitting the record.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Trait implemented by all record sinks.
///
/// Handlers are `Send + Sync` so a single instance can be shared by every
/// thread that logs. Callers ask [`Handler::enabled`] before building a
/// record and then pass the finished record to [`Handler::handle`].
pub trait Handler: Send + Sync {
    /// Return whether records at `level` should be built and handled.
    fn enabled(&self, level: Level) -> bool;

    /// Process a record that passed [`Handler::enabled`].
    fn handle(&self, record: &Record) -> Result<(), HandlerError>;

    /// Return a handler that prepends `attrs` to every record it handles.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;

    /// Return a handler that qualifies subsequent attribute keys with `name`.
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        (**self).handle(record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        (**self).with_attrs(attrs)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        (**self).with_group(name)
    }
}
