//! Compatibility bridge for the Rust `log` crate.
//!
//! [`LogAdapter`] implements `log::Log` and forwards each record to the
//! process default [`Logger`](crate::Logger) from [`manager`]. Installing
//! the adapter once with [`install_log_bridge`] and swapping the default
//! logger per test lets `log::info!` and friends land in a capture handler.

use std::sync::OnceLock;

use log::kv::{self, VisitSource};
use log::{Metadata, Record as LogRecord};
use thiserror::Error;

use crate::level::Level;
use crate::log_record::Record;
use crate::manager;
use crate::value::{Attr, Value};

/// Adapter implementing the Rust `log::Log` trait.
pub struct LogAdapter;

/// Returned when another global `log` logger was installed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("global Rust logger is already set; cannot install the capture bridge")]
pub struct BridgeInstallError;

fn bridged_level(level: log::Level) -> Option<Level> {
    let level = Level::from(level);
    level.is_recognised().then_some(level)
}

#[derive(Default)]
struct AttrCollector {
    attrs: Vec<Attr>,
}

impl<'kvs> VisitSource<'kvs> for AttrCollector {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        self.attrs.push(Attr::new(key.as_str(), convert_value(&value)));
        Ok(())
    }
}

fn convert_value(value: &kv::Value<'_>) -> Value {
    if let Some(b) = value.to_bool() {
        Value::Bool(b)
    } else if let Some(i) = value.to_i64() {
        Value::Int(i)
    } else if let Some(u) = value.to_u64() {
        Value::Uint(u)
    } else if let Some(f) = value.to_f64() {
        Value::Float(f)
    } else if let Some(s) = value.to_borrowed_str() {
        Value::String(s.to_owned())
    } else {
        Value::Display(value.to_string())
    }
}

impl log::Log for LogAdapter {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let Some(level) = bridged_level(metadata.level()) else {
            return false;
        };
        manager::default_logger().is_some_and(|logger| logger.enabled(level))
    }

    fn log(&self, record: &LogRecord<'_>) {
        let Some(level) = bridged_level(record.level()) else {
            return;
        };
        let Some(logger) = manager::default_logger() else {
            return;
        };
        if !logger.enabled(level) {
            return;
        }

        let mut collector = AttrCollector::default();
        // AttrCollector never returns an error.
        let _ = record.key_values().visit(&mut collector);

        let mut captured = Record::now(level, record.args().to_string());
        captured.add_attrs(collector.attrs);
        // Reporting through `log` here would re-enter this adapter.
        let _ = logger.log_record(&captured);
    }

    fn flush(&self) {}
}

static LOG_ADAPTER: LogAdapter = LogAdapter;
static INSTALL_RESULT: OnceLock<bool> = OnceLock::new();

/// Install [`LogAdapter`] as the global Rust logger.
///
/// The operation is idempotent: repeated calls after a successful install
/// are no-ops, and a failed install keeps failing.
pub fn install_log_bridge() -> Result<(), BridgeInstallError> {
    let installed = *INSTALL_RESULT.get_or_init(|| {
        if log::set_logger(&LOG_ADAPTER).is_err() {
            return false;
        }
        log::set_max_level(log::LevelFilter::Trace);
        true
    });
    if installed {
        Ok(())
    } else {
        Err(BridgeInstallError)
    }
}
