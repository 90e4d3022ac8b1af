//! Stepwise construction so callers don't need to name `Handler<W>` or `SharedOptions` themselves.

use super::Logger;
use crate::fmt::Style;
use crate::handler::Handler;
use crate::level::Level;
use crate::options::{RenderOptions, SharedOptions, SourceFileMode};
use std::io::{self, Write};

/// Collects options and a sink, then produces a `Logger` backed by a `Handler`.
pub struct LoggerBuilder {
    options: RenderOptions,
    shared: Option<SharedOptions>,
    sink: Box<dyn Write + Send>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Default options, writing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            shared: None,
            sink: Box::new(io::stderr()),
        }
    }

    /// Replaces every option at once.
    #[must_use]
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Uses an existing shared table, so the caller can keep retuning it after `build`.
    /// Takes precedence over everything set through the other option methods.
    #[must_use]
    pub fn shared_options(mut self, shared: SharedOptions) -> Self {
        self.shared = Some(shared);
        self
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.options.min_level = level;
        self
    }

    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.options.time_format = format.into();
        self
    }

    #[must_use]
    pub const fn source_file_mode(mut self, mode: SourceFileMode) -> Self {
        self.options.source_file_mode = mode;
        self
    }

    #[must_use]
    pub fn level_color(mut self, level: Level, style: Style) -> Self {
        self.options.level_colors.insert(level, style);
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.options.no_color = !enabled;
        self
    }

    #[must_use]
    pub fn stdout(mut self) -> Self {
        self.sink = Box::new(io::stdout());
        self
    }

    #[must_use]
    pub fn stderr(mut self) -> Self {
        self.sink = Box::new(io::stderr());
        self
    }

    /// Any byte sink: a file, a socket, an in-memory buffer.
    #[must_use]
    pub fn writer(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let options = self.shared.unwrap_or_else(|| SharedOptions::new(self.options));
        Logger::new(Handler::new(self.sink, options))
    }
}
