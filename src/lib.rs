//! `logtint` - colorized, human-readable terminal rendering for structured log records.
//!
//! A record (level, time, message, optional caller location, and a tree of attributes)
//! becomes one line of colored text, followed by its attributes: scalars side by side as
//! `key=value`, each group on its own `key:` line with its children indented beneath:
//!
//! ```text
//! INF 2025-01-15 14:30:00 main.rs:42 request served
//! method=GET status=200
//! http:
//!   headers:
//!     accept="text/html, */*"
//! ```
//!
//! # Example
//!
//! ```
//! use logtint::{Attr, Level, Logger, RenderOptions};
//!
//! let logger = Logger::builder()
//!     .options(RenderOptions::default())
//!     .level(Level::DEBUG)
//!     .stderr()
//!     .build();
//!
//! logger
//!     .info("request served", [
//!         Attr::new("method", "GET"),
//!         Attr::group("http", [Attr::new("status", 200)]),
//!     ])
//!     .unwrap();
//! ```
//!
//! Rendering is also available without a handler:
//!
//! ```
//! use logtint::{Level, Record, RenderOptions, render};
//!
//! let record = Record::new(Level::WARN, chrono::Utc::now(), "disk almost full").attr("free_mb", 312);
//! assert_eq!(render(&record, &RenderOptions::plain()), "WRN disk almost full\nfree_mb=312\n");
//! ```

pub mod config;
pub mod fmt;
pub mod handler;
pub mod internal;
pub mod level;
pub mod logger;
pub mod options;
pub mod record;
pub mod render;

mod error;

pub use config::Config;
pub use error::Error;
pub use fmt::{Color, Paint, Style};
pub use handler::{Handle, Handler};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use options::{RenderOptions, SharedOptions, SourceFileMode};
pub use record::{Attr, Record, Source, Value};
pub use render::{render, render_lines};
