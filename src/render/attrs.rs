//! Flattens an attribute tree into indented lines.
//!
//! Scalars at one depth share a line as `key=value` pairs. A group ends that line, prints
//! `key:` at the current depth, and its children follow one level deeper. Scalars after
//! the group start a fresh line back at the outer depth. Order is exactly the input order.

use super::Painter;
use crate::record::{Attr, Value};

/// Walks the tree with an explicit stack of frames so nesting depth is bounded by memory,
/// not by the thread's stack.
pub(super) fn flatten(attrs: &[Attr], painter: &Painter<'_>, out: &mut Vec<String>) {
    let options = painter.options;
    let mut frames = vec![Frame::new(attrs, 0)];

    while let Some(frame) = frames.last_mut() {
        let Some(attr) = frame.attrs.next() else {
            if let Some(mut done) = frames.pop() {
                flush(&mut done.line, done.depth, painter, out);
            }
            continue;
        };

        if let Value::Group(children) = &attr.value {
            let depth = frame.depth;
            flush(&mut frame.line, depth, painter, out);
            out.push(format!(
                "{}{}:",
                options.indent.repeat(depth),
                painter.paint(&options.attr_key_color, &attr.key)
            ));
            frames.push(Frame::new(children, depth + 1));
            continue;
        }

        let line = &mut frame.line;
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&painter.paint(&options.attr_key_color, &attr.key));
        line.push('=');
        let value = scalar_text(&attr.value, options.quote_attr_values);
        line.push_str(&painter.paint(&options.attr_val_color, &value));
    }
}

/// One group being walked: its remaining children and the scalars collected so far.
struct Frame<'a> {
    attrs: std::slice::Iter<'a, Attr>,
    depth: usize,
    line: String,
}

impl<'a> Frame<'a> {
    fn new(attrs: &'a [Attr], depth: usize) -> Self {
        Self {
            attrs: attrs.iter(),
            depth,
            line: String::new(),
        }
    }
}

fn flush(line: &mut String, depth: usize, painter: &Painter<'_>, out: &mut Vec<String>) {
    if line.is_empty() {
        return;
    }
    let indent = painter.options.indent.repeat(depth);
    out.push(format!("{indent}{line}"));
    line.clear();
}

fn scalar_text(value: &Value, quote: bool) -> String {
    let text = value.to_string();
    if quote && needs_quoting(&text) {
        format!("{text:?}")
    } else {
        text
    }
}

/// Empty values and values with whitespace, `=`, or `"` would be ambiguous unquoted.
#[must_use]
pub fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || text
            .chars()
            .any(|c| c.is_whitespace() || c == '=' || c == '"')
}
