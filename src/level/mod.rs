//! Severity levels. The four standard levels are spaced four apart so that
//! custom levels can sit between them (`INFO+2` is louder than INFO but quieter than WARN).

use std::fmt;
use std::str::FromStr;

/// A numeric severity. Larger is more severe; `Ord` drives the minimum-level gate.
///
/// The derived default is severity 0, which is [`Level::INFO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i32);

impl Level {
    /// Development-time diagnostics.
    pub const DEBUG: Self = Self(-4);
    /// Normal operational milestones.
    pub const INFO: Self = Self(0);
    /// Non-fatal anomalies that may need attention.
    pub const WARN: Self = Self(4);
    /// Failures that prevent an operation from completing.
    pub const ERROR: Self = Self(8);

    /// Custom levels carry any severity; they render relative to the nearest standard level below.
    #[must_use]
    pub const fn new(severity: i32) -> Self {
        Self(severity)
    }

    #[must_use]
    pub const fn severity(self) -> i32 {
        self.0
    }

    /// The standard levels, least severe first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::DEBUG, Self::INFO, Self::WARN, Self::ERROR]
    }

    /// Name of the nearest standard level at or below this one, and the distance to it.
    const fn base(self) -> (&'static str, i32) {
        if self.0 < Self::INFO.0 {
            ("DEBUG", self.0 - Self::DEBUG.0)
        } else if self.0 < Self::WARN.0 {
            ("INFO", self.0 - Self::INFO.0)
        } else if self.0 < Self::ERROR.0 {
            ("WARN", self.0 - Self::WARN.0)
        } else {
            ("ERROR", self.0 - Self::ERROR.0)
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, offset) = self.base();
        if offset == 0 {
            f.write_str(name)
        } else {
            write!(f, "{name}{offset:+}")
        }
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts the standard names, common aliases, and the `NAME+N` / `NAME-N` form `Display` produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let (name, offset) = match lower.find(['+', '-']) {
            Some(idx) if idx > 0 => {
                let offset = lower[idx..]
                    .parse::<i32>()
                    .map_err(|_| ParseLevelError(s.to_string()))?;
                (&lower[..idx], offset)
            }
            _ => (lower.as_str(), 0),
        };

        let base = match name {
            "debug" | "dbg" => Self::DEBUG,
            "info" | "inf" => Self::INFO,
            "warn" | "warning" | "wrn" => Self::WARN,
            "error" | "err" => Self::ERROR,
            _ => return Err(ParseLevelError(s.to_string())),
        };

        base.0
            .checked_add(offset)
            .map(Self)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
