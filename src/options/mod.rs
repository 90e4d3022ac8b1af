//! The rendering policy table and its shared, lock-guarded handle.
//!
//! `RenderOptions` is plain data: every combination of fields is valid and the renderer
//! tolerates all of them. `SharedOptions` is what a handler holds, so calling code can
//! keep a clone and retune rendering while other threads are logging.

use crate::fmt::Style;
use crate::level::Level;
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// How much of the caller's file path appears in a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceFileMode {
    /// No source segment at all.
    Nop,
    /// File name only (`main.rs:69`).
    #[default]
    ShortFile,
    /// Path relative to the project root (`src/server/main.rs:69`).
    MediumFile,
    /// Path exactly as captured (`/home/user/app/src/server/main.rs:69`).
    LongFile,
}

impl SourceFileMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nop => "nop",
            Self::ShortFile => "short",
            Self::MediumFile => "medium",
            Self::LongFile => "long",
        }
    }
}

impl fmt::Display for SourceFileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFileMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nop" | "none" | "off" => Ok(Self::Nop),
            "short" | "shortfile" => Ok(Self::ShortFile),
            "medium" | "mediumfile" | "relative" => Ok(Self::MediumFile),
            "long" | "longfile" | "full" => Ok(Self::LongFile),
            _ => Err(crate::Error::InvalidSourceMode(s.to_string())),
        }
    }
}

/// Every rendering knob in one struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Records below this level are dropped before rendering.
    pub min_level: Level,
    /// Display label per level. Levels without an entry print their `Display` form.
    pub level_tags: HashMap<Level, String>,
    /// Style per level. Levels without an entry print uncolored.
    pub level_colors: HashMap<Level, Style>,
    /// Labels shorter than this are right-padded so the columns after them line up.
    pub level_width: usize,
    /// strftime pattern. Empty, or a pattern chrono rejects, omits the timestamp.
    pub time_format: String,
    pub time_color: Option<Style>,
    pub msg_color: Option<Style>,
    /// Literal text placed in front of every message.
    pub msg_prefix: String,
    /// Pads the message to this many characters. Never truncates.
    pub msg_length: Option<usize>,
    pub attr_key_color: Option<Style>,
    pub attr_val_color: Option<Style>,
    /// Quote string values that would otherwise break `key=value` scanning.
    pub quote_attr_values: bool,
    /// Repeated once per group nesting level on attribute lines.
    pub indent: String,
    pub source_file_mode: SourceFileMode,
    /// Keeps only the rightmost N characters of the source segment.
    pub source_file_length: Option<usize>,
    pub source_file_color: Option<Style>,
    /// Base for `MediumFile` paths. `None` means the working directory at render time.
    pub project_root: Option<PathBuf>,
    /// Overrides every style above with plain text.
    pub no_color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            min_level: Level::INFO,
            level_tags: default_level_tags(),
            level_colors: default_level_colors(),
            level_width: 3,
            time_format: "%Y-%m-%d %H:%M:%S".to_string(),
            time_color: None,
            msg_color: None,
            msg_prefix: String::new(),
            msg_length: None,
            attr_key_color: None,
            attr_val_color: None,
            quote_attr_values: true,
            indent: "  ".to_string(),
            source_file_mode: SourceFileMode::default(),
            source_file_length: None,
            source_file_color: None,
            project_root: None,
            no_color: false,
        }
    }
}

fn default_level_tags() -> HashMap<Level, String> {
    [
        (Level::DEBUG, "DBG"),
        (Level::INFO, "INF"),
        (Level::WARN, "WRN"),
        (Level::ERROR, "ERR"),
    ]
    .into_iter()
    .map(|(level, tag)| (level, tag.to_string()))
    .collect()
}

fn default_level_colors() -> HashMap<Level, Style> {
    use crate::fmt::Color;

    HashMap::from([
        (Level::DEBUG, Style::new().dim()),
        (Level::INFO, Style::new().fg(Color::cyan())),
        (Level::WARN, Style::new().fg(Color::yellow())),
        (Level::ERROR, Style::new().fg(Color::red())),
    ])
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No colors, no timestamp, no source: only level, message, and attributes.
    /// Useful for tests and for output that is piped into other tools.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            time_format: String::new(),
            source_file_mode: SourceFileMode::Nop,
            no_color: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn level_tag(mut self, level: Level, tag: impl Into<String>) -> Self {
        self.level_tags.insert(level, tag.into());
        self
    }

    #[must_use]
    pub fn level_color(mut self, level: Level, style: Style) -> Self {
        self.level_colors.insert(level, style);
        self
    }

    #[must_use]
    pub const fn level_width(mut self, width: usize) -> Self {
        self.level_width = width;
        self
    }

    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    #[must_use]
    pub const fn time_color(mut self, style: Option<Style>) -> Self {
        self.time_color = style;
        self
    }

    #[must_use]
    pub const fn msg_color(mut self, style: Option<Style>) -> Self {
        self.msg_color = style;
        self
    }

    #[must_use]
    pub fn msg_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.msg_prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn msg_length(mut self, length: Option<usize>) -> Self {
        self.msg_length = length;
        self
    }

    #[must_use]
    pub const fn attr_key_color(mut self, style: Option<Style>) -> Self {
        self.attr_key_color = style;
        self
    }

    #[must_use]
    pub const fn attr_val_color(mut self, style: Option<Style>) -> Self {
        self.attr_val_color = style;
        self
    }

    #[must_use]
    pub const fn quote_attr_values(mut self, quote: bool) -> Self {
        self.quote_attr_values = quote;
        self
    }

    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub const fn source_file_mode(mut self, mode: SourceFileMode) -> Self {
        self.source_file_mode = mode;
        self
    }

    #[must_use]
    pub const fn source_file_length(mut self, length: Option<usize>) -> Self {
        self.source_file_length = length;
        self
    }

    #[must_use]
    pub const fn source_file_color(mut self, style: Option<Style>) -> Self {
        self.source_file_color = style;
        self
    }

    #[must_use]
    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }
}

/// Jointly owned, read/write-locked options.
///
/// Renders take the read lock for the duration of one record's composition, so a
/// concurrent `update` is seen either entirely or not at all.
#[derive(Debug, Clone, Default)]
pub struct SharedOptions {
    inner: Arc<RwLock<RenderOptions>>,
}

impl SharedOptions {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            inner: Arc::new(RwLock::new(options)),
        }
    }

    /// Holds the read lock until the guard drops. Keep it short: writers wait on it.
    pub fn read(&self) -> RwLockReadGuard<'_, RenderOptions> {
        self.inner.read()
    }

    /// A consistent copy of the current options.
    #[must_use]
    pub fn get(&self) -> RenderOptions {
        self.inner.read().clone()
    }

    /// Swaps the whole table at once.
    pub fn set(&self, options: RenderOptions) {
        *self.inner.write() = options;
    }

    /// Applies several changes under one write lock so no render sees a half-applied set.
    pub fn update(&self, f: impl FnOnce(&mut RenderOptions)) {
        f(&mut *self.inner.write());
    }

    pub fn set_min_level(&self, level: Level) {
        self.inner.write().min_level = level;
    }

    pub fn set_time_format(&self, format: impl Into<String>) {
        self.inner.write().time_format = format.into();
    }

    pub fn set_source_file_mode(&self, mode: SourceFileMode) {
        self.inner.write().source_file_mode = mode;
    }

    pub fn set_source_file_length(&self, length: Option<usize>) {
        self.inner.write().source_file_length = length;
    }

    pub fn set_level_color(&self, level: Level, style: Option<Style>) {
        let mut options = self.inner.write();
        match style {
            Some(style) => options.level_colors.insert(level, style),
            None => options.level_colors.remove(&level),
        };
    }

    pub fn set_no_color(&self, no_color: bool) {
        self.inner.write().no_color = no_color;
    }

    /// True when both handles point at the same table.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<RenderOptions> for SharedOptions {
    fn from(options: RenderOptions) -> Self {
        Self::new(options)
    }
}
