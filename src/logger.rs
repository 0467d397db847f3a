//! Logger front-end that turns calls into records for a [`Handler`].
//!
//! The logger owns no state beyond its handler. It asks the handler whether a
//! level is enabled, stamps the record with the current time, and dispatches
//! it. Code under test can accept a `Logger` directly so tests inject a
//! capture handler without touching any process-wide state.

use std::fmt;
use std::sync::Arc;

use log::warn;

use crate::handler::{Handler, HandlerError};
use crate::level::Level;
use crate::log_record::Record;
use crate::value::Attr;

#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    /// Create a logger dispatching to `handler`.
    pub fn new<H>(handler: H) -> Self
    where
        H: Handler + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Create a logger from an already shared handler.
    pub fn from_arc(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    /// Borrow the handler this logger dispatches to.
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// Return whether the handler accepts `level`.
    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Log `message` with `attrs` at `level`.
    ///
    /// Handler errors are reported through the `log` facade and otherwise
    /// swallowed so call sites never need to handle them.
    pub fn log<I>(&self, level: Level, message: &str, attrs: I)
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        if !self.enabled(level) {
            return;
        }
        let mut record = Record::now(level, message);
        record.add_attrs(attrs);
        if let Err(err) = self.handler.handle(&record) {
            warn!("Logger: handler rejected record at {level}: {err}");
        }
    }

    /// Dispatch a prebuilt record without consulting [`Logger::enabled`].
    pub fn log_record(&self, record: &Record) -> Result<(), HandlerError> {
        self.handler.handle(record)
    }

    pub fn debug<I>(&self, message: &str, attrs: I)
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        self.log(Level::DEBUG, message, attrs);
    }

    pub fn info<I>(&self, message: &str, attrs: I)
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        self.log(Level::INFO, message, attrs);
    }

    pub fn warn<I>(&self, message: &str, attrs: I)
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        self.log(Level::WARN, message, attrs);
    }

    pub fn error<I>(&self, message: &str, attrs: I)
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        self.log(Level::ERROR, message, attrs);
    }

    /// Return a logger whose handler carries `attrs` on every record.
    pub fn with<I>(&self, attrs: I) -> Logger
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        let attrs = attrs.into_iter().map(Into::into).collect();
        Logger::from_arc(self.handler.with_attrs(attrs))
    }

    /// Return a logger whose handler nests subsequent attributes under `name`.
    pub fn with_group(&self, name: &str) -> Logger {
        Logger::from_arc(self.handler.with_group(name))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Logger(<dyn Handler>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureHandler;
    use crate::test_utils::CollectingHandler;
    use chrono::DateTime;
    use static_assertions::assert_impl_all;

    const NO_ATTRS: [Attr; 0] = [];

    struct FailingHandler;

    impl Handler for FailingHandler {
        fn enabled(&self, _level: Level) -> bool {
            true
        }

        fn handle(&self, _record: &Record) -> Result<(), HandlerError> {
            Err(HandlerError::Failed("disk full".into()))
        }

        fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Handler> {
            Arc::new(FailingHandler)
        }

        fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
            Arc::new(FailingHandler)
        }
    }

    #[test]
    fn logger_is_send_sync() {
        assert_impl_all!(Logger: Send, Sync, Clone);
    }

    #[test]
    fn convenience_methods_use_their_level() {
        let capture = CaptureHandler::new();
        let logger = Logger::new(capture.clone());
        logger.debug("d", NO_ATTRS);
        logger.info("i", [("user", "bob")]);
        logger.warn("w", NO_ATTRS);
        logger.error("e", [("code", 7)]);

        let lines = capture.read();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with(" [DEBUG] d"));
        assert!(lines[1].ends_with(" [INFO] i, user: bob"));
        assert!(lines[2].ends_with(" [WARN] w"));
        assert!(lines[3].ends_with(" [ERROR] e, code: 7"));
    }

    #[test]
    fn log_record_keeps_supplied_timestamp() {
        let capture = CaptureHandler::new();
        let logger = Logger::new(capture.clone());
        let time = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").expect("valid timestamp");
        let record = Record::new(time, Level::INFO, "hello").with_attr(("user", "bob"));
        logger.log_record(&record).expect("capture never fails");
        assert_eq!(
            capture.read(),
            vec!["2024-01-01T00:00:00Z [INFO] hello, user: bob".to_string()]
        );
    }

    #[test]
    #[should_panic(expected = "unrecognised log level")]
    fn logging_at_unrecognised_level_is_fatal() {
        let logger = Logger::new(CaptureHandler::new());
        logger.log(Level::new(3), "odd", NO_ATTRS);
    }

    #[test]
    fn log_record_propagates_handler_errors() {
        let logger = Logger::new(FailingHandler);
        let err = logger
            .log_record(&Record::now(Level::INFO, "lost"))
            .expect_err("handler should fail");
        assert_eq!(err.to_string(), "handler failed: disk full");
        logger.info("swallowed", NO_ATTRS);
    }

    #[test]
    fn derivation_delegates_to_handler() {
        let logger = Logger::new(FailingHandler);
        let derived = logger.with([("k", "v")]).with_group("g");
        assert!(derived.log_record(&Record::now(Level::INFO, "x")).is_err());
    }

    #[test]
    fn with_prepends_attrs_on_supporting_handler() {
        let collecting = CollectingHandler::new();
        let logger = Logger::new(collecting.clone()).with([("request_id", 9)]);
        logger.info("served", [("status", 200)]);

        let records = collecting.collected();
        assert_eq!(records.len(), 1);
        let keys: Vec<&str> = records[0].attrs().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["request_id", "status"]);
    }

    #[test]
    #[should_panic(expected = "with_attrs")]
    fn capture_logger_rejects_with() {
        let logger = Logger::new(CaptureHandler::new());
        let _ = logger.with([("request_id", 1)]);
    }
}
