//! Process-wide default logger slot.
//!
//! Access is guarded by a `parking_lot::RwLock`. Tests that install a default
//! logger share this slot with every other test in the process and should be
//! serialised (for example with `serial_test`).

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::logger::Logger;

static DEFAULT: Lazy<RwLock<Option<Logger>>> = Lazy::new(|| RwLock::new(None));

/// Install `logger` as the process default, returning the previous one.
pub fn set_default(logger: Logger) -> Option<Logger> {
    DEFAULT.write().replace(logger)
}

/// Return a clone of the current default logger, if one is installed.
pub fn default_logger() -> Option<Logger> {
    DEFAULT.read().clone()
}

/// Remove the default logger, returning it.
pub fn clear_default() -> Option<Logger> {
    DEFAULT.write().take()
}
