//! Log record representation.
//!
//! A [`Record`] is a single structured event: when it happened, how severe it
//! is, the message, and the attributes attached to it in order.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

use crate::level::Level;
use crate::value::Attr;

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    time: DateTime<FixedOffset>,
    level: Level,
    message: String,
    attrs: Vec<Attr>,
}

impl Record {
    /// Construct a record with an explicit timestamp and no attributes.
    pub fn new(time: DateTime<FixedOffset>, level: Level, message: impl Into<String>) -> Self {
        Self {
            time,
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    /// Construct a record stamped with the current UTC time.
    pub fn now(level: Level, message: impl Into<String>) -> Self {
        Self::new(Utc::now().fixed_offset(), level, message)
    }

    /// Attach `attr` after any existing attributes.
    pub fn add_attr(&mut self, attr: impl Into<Attr>) {
        self.attrs.push(attr.into());
    }

    /// Attach every attribute from `attrs`, preserving their order.
    pub fn add_attrs<I>(&mut self, attrs: I)
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        self.attrs.extend(attrs.into_iter().map(Into::into));
    }

    /// Builder form of [`Record::add_attr`].
    pub fn with_attr(mut self, attr: impl Into<Attr>) -> Self {
        self.add_attr(attr);
        self
    }

    pub fn time(&self) -> DateTime<FixedOffset> {
        self.time
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Iterate over the attributes in the order they were attached.
    pub fn attrs(&self) -> impl Iterator<Item = &Attr> + '_ {
        self.attrs.iter()
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.level, self.message)
    }
}
