//! Terminal decoration: colors, styles, and the `Paint` capability the renderer uses per field.

mod color;
mod style;

pub use color::Color;
pub use style::{Paint, ParseStyleError, Style};
