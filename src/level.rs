//! Severity levels for captured records.
//!
//! A [`Level`] is a point on an open integer scale. Four points on that scale
//! are recognised by name; every other value is still representable so that
//! bridges and callers can express custom severities, but handlers treat such
//! values as outside the recognised set.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i8);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    /// Level used for `TRACE` records arriving through the facade bridges.
    pub const TRACE: Level = Level(-8);

    /// Construct a level from its raw scale value.
    pub const fn new(value: i8) -> Self {
        Self(value)
    }

    /// Raw position on the severity scale.
    pub const fn value(self) -> i8 {
        self.0
    }

    /// Return `true` for DEBUG, INFO, WARN and ERROR.
    pub const fn is_recognised(self) -> bool {
        matches!(self.0, -4 | 0 | 4 | 8)
    }

    /// Return the level offset by `delta`, saturating at the scale bounds.
    pub const fn offset(self, delta: i8) -> Self {
        Self(self.0.saturating_add(delta))
    }

    fn base(self) -> (&'static str, Level) {
        if self < Level::INFO {
            ("DEBUG", Level::DEBUG)
        } else if self < Level::WARN {
            ("INFO", Level::INFO)
        } else if self < Level::ERROR {
            ("WARN", Level::WARN)
        } else {
            ("ERROR", Level::ERROR)
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, base) = self.base();
        let delta = i16::from(self.0) - i16::from(base.0);
        if delta == 0 {
            f.write_str(name)
        } else {
            write!(f, "{name}{delta:+}")
        }
    }
}

/// Error returned when a string does not name a level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid log level: {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let (name, delta) = match upper.find(['+', '-']) {
            Some(idx) => {
                let delta = upper[idx..]
                    .parse::<i8>()
                    .map_err(|_| ParseLevelError::new(s))?;
                (&upper[..idx], delta)
            }
            None => (upper.as_str(), 0),
        };
        let base = match name {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" | "WARNING" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => return Err(ParseLevelError::new(s)),
        };
        base.0
            .checked_add(delta)
            .map(Level)
            .ok_or_else(|| ParseLevelError::new(s))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::TRACE,
            log::Level::Debug => Level::DEBUG,
            log::Level::Info => Level::INFO,
            log::Level::Warn => Level::WARN,
            log::Level::Error => Level::ERROR,
        }
    }
}

#[cfg(feature = "tracing-compat")]
impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Level::TRACE,
            tracing::Level::DEBUG => Level::DEBUG,
            tracing::Level::INFO => Level::INFO,
            tracing::Level::WARN => Level::WARN,
            _ => Level::ERROR,
        }
    }
}
