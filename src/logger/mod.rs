//! A minimal front-end: builds records from call sites and hands them to a `Handle`.
//!
//! Every logging method is `#[track_caller]`, so the record's source location is the line
//! that called `info`/`warn`/... rather than somewhere inside this module.

mod builder;

pub use builder::LoggerBuilder;

use crate::handler::Handle;
use crate::level::Level;
use crate::record::{Attr, Record, Source};
use chrono::Local;
use std::panic::Location;
use std::sync::Arc;

/// Cheap to clone; clones share the handler.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handle>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub fn new(handler: impl Handle + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn from_handle(handler: Arc<dyn Handle>) -> Self {
        Self { handler }
    }

    #[must_use]
    pub fn handler(&self) -> &Arc<dyn Handle> {
        &self.handler
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// A logger whose records all carry `attrs`.
    #[must_use]
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self {
            handler: self.handler.with_attrs(attrs.into_iter().collect()),
        }
    }

    /// A logger whose later attributes nest under `name`.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        Self {
            handler: self.handler.with_group(name),
        }
    }

    /// Stamps the record with the local time and the caller's location, then dispatches it.
    /// Records below the handler's minimum level are never built.
    ///
    /// # Errors
    /// The handler's write error, unretried.
    #[track_caller]
    pub fn log(
        &self,
        level: Level,
        msg: &str,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), crate::Error> {
        if !self.handler.enabled(level) {
            return Ok(());
        }
        let record = Record::new(level, Local::now(), msg)
            .source(Source::from(Location::caller()))
            .attrs(attrs);
        self.handler.handle(&record)
    }

    /// # Errors
    /// The handler's write error.
    #[track_caller]
    pub fn debug(&self, msg: &str, attrs: impl IntoIterator<Item = Attr>) -> Result<(), crate::Error> {
        self.log(Level::DEBUG, msg, attrs)
    }

    /// # Errors
    /// The handler's write error.
    #[track_caller]
    pub fn info(&self, msg: &str, attrs: impl IntoIterator<Item = Attr>) -> Result<(), crate::Error> {
        self.log(Level::INFO, msg, attrs)
    }

    /// # Errors
    /// The handler's write error.
    #[track_caller]
    pub fn warn(&self, msg: &str, attrs: impl IntoIterator<Item = Attr>) -> Result<(), crate::Error> {
        self.log(Level::WARN, msg, attrs)
    }

    /// # Errors
    /// The handler's write error.
    #[track_caller]
    pub fn error(&self, msg: &str, attrs: impl IntoIterator<Item = Attr>) -> Result<(), crate::Error> {
        self.log(Level::ERROR, msg, attrs)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
