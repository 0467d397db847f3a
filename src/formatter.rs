use chrono::SecondsFormat;

use crate::log_record::Record;

/// Trait for formatting log records into strings.
///
/// Implementors must be thread-safe (`Send + Sync`) so formatters can be
/// shared by handlers that are called from many threads.
pub trait RecordFormatter: Send + Sync {
    /// Format a log record into a string representation.
    fn format(&self, record: &Record) -> String;
}

/// Renders `"<time> [<LEVEL>] <message>, <key>: <value>, ..."` on one line.
///
/// The timestamp uses RFC 3339 with whole seconds and `Z` for UTC.
#[derive(Copy, Clone, Debug, Default)]
pub struct CaptureFormatter;

impl RecordFormatter for CaptureFormatter {
    fn format(&self, record: &Record) -> String {
        let mut output = format!(
            "{} [{}] {}",
            record.time().to_rfc3339_opts(SecondsFormat::Secs, true),
            record.level(),
            record.message()
        );
        for attr in record.attrs() {
            output.push_str(", ");
            output.push_str(&attr.to_string());
        }
        output
    }
}

impl<F: RecordFormatter + ?Sized> RecordFormatter for Box<F> {
    fn format(&self, record: &Record) -> String {
        (**self).format(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::test_utils::record_at;
    use proptest::prelude::*;
    use static_assertions::assert_impl_all;

    #[test]
    fn capture_formatter_is_send_sync() {
        assert_impl_all!(CaptureFormatter: Send, Sync);
        assert_impl_all!(Box<dyn RecordFormatter>: Send, Sync);
    }

    #[test]
    fn formats_header_without_attributes() {
        let record = record_at("2024-01-01T00:00:00Z", Level::DEBUG, "starting");
        assert_eq!(
            CaptureFormatter.format(&record),
            "2024-01-01T00:00:00Z [DEBUG] starting"
        );
    }

    #[test]
    fn appends_attributes_in_order() {
        let record = record_at("2024-01-01T00:00:00Z", Level::INFO, "hello")
            .with_attr(("user", "bob"))
            .with_attr(("attempt", 3))
            .with_attr(("ok", false));
        assert_eq!(
            CaptureFormatter.format(&record),
            "2024-01-01T00:00:00Z [INFO] hello, user: bob, attempt: 3, ok: false"
        );
    }

    #[test]
    fn keeps_offset_and_truncates_subseconds() {
        let record = record_at("2024-06-30T23:59:59.987654+02:00", Level::ERROR, "boom");
        assert_eq!(
            CaptureFormatter.format(&record),
            "2024-06-30T23:59:59+02:00 [ERROR] boom"
        );
    }

    #[test]
    fn boxed_formatter_delegates() {
        let boxed: Box<dyn RecordFormatter> = Box::new(CaptureFormatter);
        let record = record_at("2024-01-01T00:00:00Z", Level::WARN, "careful");
        assert_eq!(boxed.format(&record), CaptureFormatter.format(&record));
    }

    proptest! {
        #[test]
        fn one_fragment_per_attribute(
            message in "[^\n]*",
            keys in proptest::collection::vec("[a-z]{1,8}", 0..6),
        ) {
            let mut record = record_at("2024-01-01T00:00:00Z", Level::INFO, &message);
            for (idx, key) in keys.iter().enumerate() {
                record.add_attr((key.as_str(), idx));
            }
            let line = CaptureFormatter.format(&record);

            let mut expected = format!("2024-01-01T00:00:00Z [INFO] {message}");
            for (idx, key) in keys.iter().enumerate() {
                expected.push_str(&format!(", {key}: {idx}"));
            }
            prop_assert_eq!(line, expected);
        }
    }
}
