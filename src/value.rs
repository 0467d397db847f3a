//! Attribute key/value pairs attached to records.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};

/// Value half of an [`Attr`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Time(DateTime<FixedOffset>),
    /// Text already rendered by the caller, typically from a `Debug` impl.
    Display(String),
}

impl Value {
    /// Wrap anything printable as a pre-rendered value.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Display(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) | Value::Display(s) => f.write_str(s),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Time(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_int!(Int: i8, i16, i32, i64);
impl_from_int!(Uint: u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Uint(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Time(value.fixed_offset())
    }
}

/// A key/value pair attached to a record.
#[derive(Clone, Debug, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Attr
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from("bob"), "bob")]
    #[case(Value::from(String::from("alice")), "alice")]
    #[case(Value::from(-3_i32), "-3")]
    #[case(Value::from(42_u64), "42")]
    #[case(Value::from(1.5_f64), "1.5")]
    #[case(Value::from(true), "true")]
    #[case(Value::display(std::net::Ipv4Addr::LOCALHOST), "127.0.0.1")]
    fn values_render_naturally(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn time_values_render_as_rfc3339() {
        let time = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .expect("valid date")
            .and_utc();
        assert_eq!(Value::from(time).to_string(), "2024-01-01T12:30:00Z");
    }

    #[test]
    fn time_values_drop_subseconds_like_the_header() {
        let time = DateTime::parse_from_rfc3339("2024-01-01T00:00:00.500+02:00")
            .expect("valid timestamp");
        assert_eq!(Value::from(time).to_string(), "2024-01-01T00:00:00+02:00");
    }

    #[test]
    fn pointer_sized_integers_convert_without_truncation() {
        let max = u64::try_from(usize::MAX).expect("usize fits in u64");
        let min = i64::try_from(isize::MIN).expect("isize fits in i64");
        assert_eq!(Value::from(usize::MAX), Value::Uint(max));
        assert_eq!(Value::from(isize::MIN), Value::Int(min));
        assert_eq!(Value::from(-7_isize).to_string(), "-7");
    }

    #[test]
    fn attr_renders_key_colon_value() {
        let attr = Attr::from(("user", "bob"));
        assert_eq!(attr.to_string(), "user: bob");
        assert_eq!(attr, Attr::new("user", Value::String("bob".into())));
    }
}
