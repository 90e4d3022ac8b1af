//! TOML configuration loading and conversion into `RenderOptions`.
//!
//! Loading is strict about syntax (a malformed file is an error) but lenient about values:
//! an unknown level name, source mode, or style token is reported through the internal
//! logger and replaced by the default, so a typo never takes logging down.

mod structs;

pub use structs::{AttrsConfig, GeneralConfig, LevelConfig, MessageConfig, SourceConfig, TimeConfig};

use crate::fmt::Style;
use crate::internal;
use crate::level::Level;
use crate::options::{RenderOptions, SourceFileMode};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce working options: `#[serde(default)]`
/// on every field gives the same result as `RenderOptions::default()`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub level: LevelConfig,
    pub time: TimeConfig,
    pub source: SourceConfig,
    pub message: MessageConfig,
    pub attrs: AttrsConfig,
}

impl Config {
    /// Loads `<config_dir>/logtint/logtint.toml`. A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::debug("CONFIG", &format!("Config resolved from {}", path.display()));
        Ok(config)
    }

    /// Loads from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns the TOML syntax or type error.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// XDG-style path: `~/.config/logtint/logtint.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("logtint").join("logtint.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores level as a string for TOML ergonomics. Unknown names fall back to INFO.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using info"));
            Level::INFO
        })
    }

    /// Unknown modes fall back to `short`.
    #[must_use]
    pub fn parse_source_mode(&self) -> SourceFileMode {
        self.source.mode.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using short"));
            SourceFileMode::ShortFile
        })
    }

    /// Builds the options table. Map-valued sections override the defaults entry by entry.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();

        options.min_level = self.parse_level();
        options.no_color = self.general.no_color;
        options.level_width = self.level.width;

        for (name, tag) in &self.level.tags {
            if let Some(level) = level_key(name) {
                options.level_tags.insert(level, tag.clone());
            }
        }
        for (name, spec) in &self.level.colors {
            let Some(level) = level_key(name) else {
                continue;
            };
            match parse_style(spec) {
                Some(style) => options.level_colors.insert(level, style),
                None => options.level_colors.remove(&level),
            };
        }

        options.time_format.clone_from(&self.time.format);
        options.time_color = parse_style(&self.time.color);

        options.source_file_mode = self.parse_source_mode();
        options.source_file_length = self.source.length;
        options.source_file_color = parse_style(&self.source.color);
        options.project_root = self
            .source
            .root
            .as_deref()
            .map(|root| PathBuf::from(shellexpand::tilde(root).as_ref()));

        options.msg_color = parse_style(&self.message.color);
        options.msg_prefix.clone_from(&self.message.prefix);
        options.msg_length = self.message.length;

        options.attr_key_color = parse_style(&self.attrs.key_color);
        options.attr_val_color = parse_style(&self.attrs.value_color);
        options.quote_attr_values = self.attrs.quote;
        options.indent.clone_from(&self.attrs.indent);

        options
    }
}

fn level_key(name: &str) -> Option<Level> {
    match name.parse() {
        Ok(level) => Some(level),
        Err(e) => {
            internal::warn("CONFIG", &format!("{e}, entry ignored"));
            None
        }
    }
}

/// `None` for an empty string, `none`, or a spec with no usable tokens.
fn parse_style(spec: &str) -> Option<Style> {
    let style = spec.parse::<Style>().unwrap_or_else(|e| {
        internal::warn("CONFIG", &format!("{e} in \"{spec}\""));
        Style::parse_lossy(spec)
    });
    (!style.is_plain()).then_some(style)
}
