//! The seam a structured-logging front-end plugs into, and the terminal handler behind it.
//!
//! A front-end asks `enabled` before building a record, then hands the record to `handle`.
//! `Handler` composes the whole record under the options read lock, releases it, and then
//! writes the text to its sink in one locked `write_all`, so concurrent records never share
//! a line and a slow sink never blocks an options update.

use crate::level::Level;
use crate::options::{RenderOptions, SharedOptions};
use crate::record::{Attr, Record};
use crate::render;
use parking_lot::{Mutex, MutexGuard};
use std::io::{self, Write};
use std::sync::Arc;

/// `Send + Sync` so one handler can back a process-wide logger shared by every thread.
pub trait Handle: Send + Sync {
    /// Whether a record at `level` would be written. Front-ends use this to skip building records.
    fn enabled(&self, level: Level) -> bool;

    /// Renders and writes one record.
    ///
    /// # Errors
    /// Returns the sink's I/O error. The record is not retried.
    fn handle(&self, record: &Record) -> Result<(), crate::Error>;

    /// A handler that prepends `attrs` to every record, inside any groups already opened.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handle>;

    /// A handler that nests every later attribute under a group named `name`.
    fn with_group(&self, name: &str) -> Arc<dyn Handle>;
}

/// Attributes and groups a derived handler carries, in the order they were added.
#[derive(Debug, Clone)]
enum Scope {
    Attrs(Vec<Attr>),
    Group(String),
}

/// Renders records as colored text into any byte sink.
pub struct Handler<W: Write + Send> {
    options: SharedOptions,
    sink: Arc<Mutex<W>>,
    scopes: Vec<Scope>,
}

// Derived handlers share the sink and options; `W` itself need not be `Clone`.
impl<W: Write + Send> Clone for Handler<W> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            sink: Arc::clone(&self.sink),
            scopes: self.scopes.clone(),
        }
    }
}

impl Handler<io::Stderr> {
    /// Terminal output on stderr with default options.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr(), RenderOptions::default())
    }
}

impl Handler<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), RenderOptions::default())
    }
}

impl<W: Write + Send> Handler<W> {
    /// Pass a `SharedOptions` clone to keep a handle for retuning options later.
    #[must_use]
    pub fn new(sink: W, options: impl Into<SharedOptions>) -> Self {
        Self {
            options: options.into(),
            sink: Arc::new(Mutex::new(sink)),
            scopes: Vec::new(),
        }
    }

    /// The live options; changes apply to the next record rendered.
    #[must_use]
    pub const fn options(&self) -> &SharedOptions {
        &self.options
    }

    /// Exclusive access to the sink. Records wait while the guard is held.
    pub fn sink(&self) -> MutexGuard<'_, W> {
        self.sink.lock()
    }

    /// Derived handler with `attrs` attached. An empty list returns an equivalent handler.
    #[must_use]
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        let attrs: Vec<Attr> = attrs.into_iter().collect();
        let mut derived = self.clone();
        if !attrs.is_empty() {
            derived.scopes.push(Scope::Attrs(attrs));
        }
        derived
    }

    /// Derived handler whose later attributes nest under `name`. An empty name is ignored.
    #[must_use]
    pub fn with_group(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut derived = self.clone();
        if !name.is_empty() {
            derived.scopes.push(Scope::Group(name));
        }
        derived
    }

    /// The text `handle` would write for `record`, without writing it or checking the level gate.
    #[must_use]
    pub fn format(&self, record: &Record) -> String {
        let options = self.options.read();
        self.format_with(record, &options)
    }

    fn format_with(&self, record: &Record, options: &RenderOptions) -> String {
        if self.scopes.is_empty() {
            return render::render(record, options);
        }
        let attrs = self.scoped_attrs(&record.attrs);
        render::render_with_attrs(record, &attrs, options)
    }

    /// Wraps the record's attributes in this handler's scopes, innermost last.
    fn scoped_attrs(&self, record_attrs: &[Attr]) -> Vec<Attr> {
        let mut attrs = record_attrs.to_vec();
        for scope in self.scopes.iter().rev() {
            match scope {
                Scope::Group(name) => attrs = vec![Attr::group(name.clone(), attrs)],
                Scope::Attrs(prefix) => {
                    let mut combined = prefix.clone();
                    combined.append(&mut attrs);
                    attrs = combined;
                }
            }
        }
        attrs
    }
}

impl<W: Write + Send + 'static> Handle for Handler<W> {
    fn enabled(&self, level: Level) -> bool {
        level >= self.options.read().min_level
    }

    fn handle(&self, record: &Record) -> Result<(), crate::Error> {
        let text = {
            let options = self.options.read();
            if record.level < options.min_level {
                return Ok(());
            }
            self.format_with(record, &options)
        };

        let mut sink = self.sink.lock();
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handle> {
        Arc::new(Self::with_attrs(self, attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handle> {
        Arc::new(Self::with_group(self, name))
    }
}
