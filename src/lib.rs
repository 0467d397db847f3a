//! In-memory log capture for tests.
//!
//! [`CaptureHandler`] implements [`Handler`] by rendering each record to a
//! single line and keeping it in memory, so tests can assert on log output
//! without a console, file or network sink:
//!
//! ```
//! use logcapture::{CaptureHandler, Level, Logger, Record};
//! use chrono::DateTime;
//!
//! let capture = CaptureHandler::new();
//! let logger = Logger::new(capture.clone());
//! let time = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
//! logger
//!     .log_record(&Record::new(time, Level::INFO, "hello").with_attr(("user", "bob")))
//!     .unwrap();
//! assert_eq!(capture.read(), ["2024-01-01T00:00:00Z [INFO] hello, user: bob"]);
//! ```
//!
//! The handler can be injected through a [`Logger`], installed as the
//! process default with [`manager::set_default`], or fed from the `log` and
//! `tracing` facades through the compatibility bridges.

pub mod capture;
pub mod formatter;
pub mod handler;
pub mod level;
#[cfg(feature = "log-compat")]
pub mod log_compat;
pub mod log_record;
pub mod logger;
pub mod manager;
#[cfg(any(test, feature = "test-util"))]
pub mod test_utils;
#[cfg(feature = "tracing-compat")]
pub mod tracing_compat;
pub mod value;

pub use capture::CaptureHandler;
pub use formatter::{CaptureFormatter, RecordFormatter};
pub use handler::{Handler, HandlerError};
pub use level::{Level, ParseLevelError};
#[cfg(feature = "log-compat")]
pub use log_compat::{BridgeInstallError, LogAdapter, install_log_bridge};
pub use log_record::Record;
pub use logger::Logger;
#[cfg(feature = "tracing-compat")]
pub use tracing_compat::CaptureLayer;
pub use value::{Attr, Value};
