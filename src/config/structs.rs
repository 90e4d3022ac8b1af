//! Configuration struct definitions. Each section maps to a group of `RenderOptions` fields.

use serde::Deserialize;
use std::collections::HashMap;

/// Options that span the whole line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Disable all colors.
    pub no_color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            no_color: false,
        }
    }
}

/// Level label appearance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Minimum label width.
    pub width: usize,
    /// Label overrides keyed by level name (`info = "INFO"`).
    pub tags: HashMap<String, String>,
    /// Style overrides keyed by level name (`warn = "bold yellow"`).
    pub colors: HashMap<String, String>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: 3,
            tags: HashMap::new(),
            colors: HashMap::new(),
        }
    }
}

/// Timestamp segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// strftime pattern; empty hides the timestamp.
    pub format: String,
    /// Style string.
    pub color: String,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            format: "%Y-%m-%d %H:%M:%S".to_string(),
            color: String::new(),
        }
    }
}

/// Source location segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// `nop`, `short`, `medium`, or `long`.
    pub mode: String,
    /// Maximum characters kept from the right.
    pub length: Option<usize>,
    /// Style string.
    pub color: String,
    /// Base directory for `medium` paths (`~` is expanded).
    pub root: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: "short".to_string(),
            length: None,
            color: String::new(),
            root: None,
        }
    }
}

/// Message segment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Style string.
    pub color: String,
    /// Text placed before every message.
    pub prefix: String,
    /// Pad messages to this width.
    pub length: Option<usize>,
}

/// Attribute lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AttrsConfig {
    /// Style string for keys.
    pub key_color: String,
    /// Style string for values.
    pub value_color: String,
    /// Quote values containing whitespace or separators.
    pub quote: bool,
    /// Indentation unit per group level.
    pub indent: String,
}

impl Default for AttrsConfig {
    fn default() -> Self {
        Self {
            key_color: String::new(),
            value_color: String::new(),
            quote: true,
            indent: "  ".to_string(),
        }
    }
}
