//! Record-to-text rendering.
//!
//! The first line is `LEVEL [time] [source] message`, segments joined by single spaces and
//! omitted segments leaving no gap. Attribute lines follow, indented by group depth. The
//! output depends only on the record and the options (plus the working directory when
//! `MediumFile` has no explicit project root), never on the wall clock.

mod attrs;
mod source;

pub use attrs::needs_quoting;
pub use source::{format_source, truncate_left};

use crate::fmt::Paint;
use crate::options::{RenderOptions, SourceFileMode};
use crate::record::{Attr, Record};
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Applies per-field styles unless the options switch color off globally.
pub(crate) struct Painter<'a> {
    pub(crate) options: &'a RenderOptions,
}

impl Painter<'_> {
    fn paint(&self, style: &impl Paint, text: &str) -> String {
        if self.options.no_color {
            text.to_string()
        } else {
            style.paint(text)
        }
    }
}

/// Renders one record to newline-terminated text, ready for a single write.
#[must_use]
pub fn render(record: &Record, options: &RenderOptions) -> String {
    render_with_attrs(record, &record.attrs, options)
}

/// Like [`render`], but with `attrs` standing in for the record's own attributes.
/// Handlers use this to splice in attributes and groups they carry themselves.
#[must_use]
pub fn render_with_attrs(record: &Record, attrs: &[Attr], options: &RenderOptions) -> String {
    let mut out = String::new();
    for line in lines(record, attrs, options) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// The record line followed by each attribute line, without terminators.
#[must_use]
pub fn render_lines(record: &Record, options: &RenderOptions) -> Vec<String> {
    lines(record, &record.attrs, options)
}

fn lines(record: &Record, attributes: &[Attr], options: &RenderOptions) -> Vec<String> {
    let painter = Painter { options };
    let mut head = vec![level_segment(record, &painter)];

    if let Some(time) = time_segment(record, &painter) {
        head.push(time);
    }
    if let Some(source) = source_segment(record, &painter) {
        head.push(source);
    }
    head.push(message_segment(record, &painter));

    let mut out = vec![head.join(" ")];
    attrs::flatten(attributes, &painter, &mut out);
    out
}

fn level_segment(record: &Record, painter: &Painter<'_>) -> String {
    let options = painter.options;
    let label = options
        .level_tags
        .get(&record.level)
        .cloned()
        .unwrap_or_else(|| record.level.to_string());
    let padded = format!("{label:<width$}", width = options.level_width);
    painter.paint(&options.level_colors.get(&record.level), &padded)
}

fn time_segment(record: &Record, painter: &Painter<'_>) -> Option<String> {
    let options = painter.options;
    let formatted = format_time(record, &options.time_format)?;
    Some(painter.paint(&options.time_color, &formatted))
}

/// `None` for an empty pattern or one chrono can't parse, so a bad format never
/// reaches chrono's panicking `Display`.
fn format_time(record: &Record, pattern: &str) -> Option<String> {
    if pattern.is_empty() {
        return None;
    }
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", record.time.format_with_items(items.iter())).ok()?;
    Some(out)
}

fn source_segment(record: &Record, painter: &Painter<'_>) -> Option<String> {
    let options = painter.options;
    let source = record.source.as_ref()?;
    let root = match options.source_file_mode {
        SourceFileMode::MediumFile => project_root(options),
        _ => None,
    };
    let text = format_source(source, options.source_file_mode, root.as_deref())?;
    let text = match options.source_file_length {
        Some(max) => truncate_left(&text, max),
        None => &text,
    };
    Some(painter.paint(&options.source_file_color, text))
}

fn project_root(options: &RenderOptions) -> Option<PathBuf> {
    options
        .project_root
        .clone()
        .or_else(|| std::env::current_dir().ok())
}

fn message_segment(record: &Record, painter: &Painter<'_>) -> String {
    let options = painter.options;
    let text = format!("{}{}", options.msg_prefix, record.message);
    let text = match options.msg_length {
        Some(width) => format!("{text:<width$}"),
        None => text,
    };
    painter.paint(&options.msg_color, &text)
}
