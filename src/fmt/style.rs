//! Styles wrap a segment of a log line in ANSI escapes. A style with nothing set is the
//! identity: it returns the text untouched, with no escape codes at all.

use super::Color;
use std::fmt;
use std::str::FromStr;

const BOLD: u8 = 1 << 0;
const DIM: u8 = 1 << 1;
const ITALIC: u8 = 1 << 2;
const UNDERLINE: u8 = 1 << 3;

/// SGR code for each attribute bit, in emission order.
const ATTR_CODES: [(u8, u8); 4] = [(BOLD, 1), (DIM, 2), (ITALIC, 3), (UNDERLINE, 4)];

/// Anything that can decorate a piece of text for the terminal.
///
/// The renderer only ever asks for `paint`, so the no-color case and the ANSI case
/// are interchangeable per field.
pub trait Paint {
    fn paint(&self, text: &str) -> String;
}

/// Foreground, background, and SGR attributes for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: u8,
}

impl Style {
    /// The identity style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: 0,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs |= BOLD;
        self
    }

    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.attrs |= DIM;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.attrs |= ITALIC;
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.attrs |= UNDERLINE;
        self
    }

    /// True when painting with this style would emit no escape codes.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs == 0
    }

    /// The opening escape sequence; empty for the identity style.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut out = String::new();
        for (bit, code) in ATTR_CODES {
            if self.attrs & bit != 0 {
                out.push_str(&format!("\x1b[{code}m"));
            }
        }
        if let Some(fg) = self.fg {
            out.push_str(&fg.fg_ansi());
        }
        if let Some(bg) = self.bg {
            out.push_str(&bg.bg_ansi());
        }
        out
    }

    /// Like `FromStr`, but skips tokens it doesn't understand instead of failing.
    #[must_use]
    pub fn parse_lossy(spec: &str) -> Self {
        let mut style = Self::new();
        let mut tokens = spec.split_whitespace();
        while let Some(token) = tokens.next() {
            if token.eq_ignore_ascii_case("on") {
                if let Some(color) = tokens.next().and_then(Color::named) {
                    style.bg = Some(color);
                }
                continue;
            }
            let _ = style.apply_token(token);
        }
        style
    }

    /// Folds one non-`on` token into the style. `false` if the token is unknown.
    fn apply_token(&mut self, token: &str) -> bool {
        match token.to_lowercase().as_str() {
            "none" | "plain" => {}
            "bold" => self.attrs |= BOLD,
            "dim" => self.attrs |= DIM,
            "italic" => self.attrs |= ITALIC,
            "underline" => self.attrs |= UNDERLINE,
            other => match Color::named(other) {
                Some(color) => self.fg = Some(color),
                None => return false,
            },
        }
        true
    }
}

impl Paint for Style {
    fn paint(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        format!("{}{text}{}", self.prefix(), Color::RESET)
    }
}

impl<P: Paint + ?Sized> Paint for &P {
    fn paint(&self, text: &str) -> String {
        (**self).paint(text)
    }
}

/// An unset style paints nothing, so `Option<Style>` fields never need a fallback at the call site.
impl<P: Paint> Paint for Option<P> {
    fn paint(&self, text: &str) -> String {
        match self {
            Some(p) => p.paint(text),
            None => text.to_string(),
        }
    }
}

/// Returned when a style string contains a token that is neither an attribute nor a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError(String);

impl ParseStyleError {
    /// The offending token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown style token: '{}'", self.0)
    }
}

impl std::error::Error for ParseStyleError {}

impl FromStr for Style {
    type Err = ParseStyleError;

    /// `"bold red"`, `"dim"`, `"#ff79c6 on blue"`. Empty or `none` is the identity style.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Self::new();
        let mut tokens = s.split_whitespace();
        while let Some(token) = tokens.next() {
            if token.eq_ignore_ascii_case("on") {
                let name = tokens.next().unwrap_or_default();
                style.bg = Some(Color::named(name).ok_or_else(|| ParseStyleError(name.to_string()))?);
                continue;
            }
            if !style.apply_token(token) {
                return Err(ParseStyleError(token.to_string()));
            }
        }
        Ok(style)
    }
}
