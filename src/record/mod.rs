//! The structured log event the renderer consumes: level, time, message, optional caller
//! location, and an ordered attribute tree.

use crate::level::Level;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::fmt;
use std::time::Duration;

/// Where the log call came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub file: String,
    pub line: u32,
}

impl Source {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl From<&std::panic::Location<'_>> for Source {
    fn from(location: &std::panic::Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// An attribute value: one of a closed set of scalars, or a named group of further attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Time(DateTime<FixedOffset>),
    Duration(Duration),
    /// Children keep their insertion order; duplicate keys are allowed.
    Group(Vec<Attr>),
}

impl Value {
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

/// Unnests groups onto a work list first, so dropping a deeply nested tree can't exhaust the stack.
impl Drop for Value {
    fn drop(&mut self) {
        let Self::Group(children) = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut attr) = pending.pop() {
            if let Self::Group(grandchildren) = &mut attr.value {
                pending.append(grandchildren);
            }
        }
    }
}

/// Scalars stringify the way they read in a log line. Groups have no scalar form and render empty.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::Time(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Duration(v) => write!(f, "{v:?}"),
            Self::Group(_) => Ok(()),
        }
    }
}

macro_rules! value_from {
    ($variant:ident: $($ty:ty),+ => $target:ty) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

value_from!(Int: i8, i16, i32, i64 => i64);
value_from!(Uint: u8, u16, u32, u64 => u64);
value_from!(Float: f32, f64 => f64);

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Uint(u64::try_from(v).unwrap_or(u64::MAX))
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Time(v.fixed_offset())
    }
}

impl From<Vec<Attr>> for Value {
    fn from(v: Vec<Attr>) -> Self {
        Self::Group(v)
    }
}

/// One key/value pair of a record's attribute tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A named group. An empty `attrs` is valid and still renders its key.
    #[must_use]
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Self>) -> Self {
        Self {
            key: key.into(),
            value: Value::Group(attrs.into_iter().collect()),
        }
    }
}

/// One emitted log event.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    /// The only time source the renderer looks at.
    pub time: DateTime<FixedOffset>,
    pub message: String,
    pub source: Option<Source>,
    pub attrs: Vec<Attr>,
}

impl Record {
    #[must_use]
    pub fn new<Tz: TimeZone>(level: Level, time: DateTime<Tz>, message: impl Into<String>) -> Self {
        Self {
            level,
            time: time.fixed_offset(),
            message: message.into(),
            source: None,
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Appends one attribute after any already present.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.push(Attr::new(key, value));
        self
    }

    #[must_use]
    pub fn attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}
