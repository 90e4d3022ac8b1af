//! logtint's own diagnostic logger, rendered through the same pipeline it provides.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several entry
//! points race to call `init`. Calls made before initialization are dropped silently,
//! which is what config loading relies on when it runs ahead of `init`.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use crate::record::Attr;
use std::io::{self, Write};
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Loads the user's config and builds the internal logger from it. Later calls are no-ops.
pub fn init() {
    if INTERNAL_LOGGER.get().is_some() {
        return;
    }
    let config = Config::load().unwrap_or_default();
    init_with_config(&config);
}

/// Reuses an already-loaded config to avoid reading the file twice.
pub fn init_with_config(config: &Config) {
    install(config, Box::new(io::stderr()));
}

/// Like [`init_with_config`], but diagnostics go to `sink` instead of stderr.
pub fn init_with_writer(config: &Config, sink: impl Write + Send + 'static) {
    install(config, Box::new(sink));
}

#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

fn install(config: &Config, sink: Box<dyn Write + Send>) {
    let mut installed = false;
    INTERNAL_LOGGER.get_or_init(|| {
        installed = true;
        Logger::builder()
            .options(config.render_options())
            .writer(sink)
            .build()
    });
    if installed {
        debug("INTERNAL", &format!("Log level: {}", config.parse_level()));
        debug("INTERNAL", "Internal logger ready");
    }
}

#[track_caller]
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        // Nowhere left to report a failed diagnostic write.
        let _ = logger.log(level, msg, [Attr::new("scope", scope)]);
    }
}

#[track_caller]
pub fn debug(scope: &str, msg: &str) {
    log(Level::DEBUG, scope, msg);
}

#[track_caller]
pub fn info(scope: &str, msg: &str) {
    log(Level::INFO, scope, msg);
}

#[track_caller]
pub fn warn(scope: &str, msg: &str) {
    log(Level::WARN, scope, msg);
}

#[track_caller]
pub fn error(scope: &str, msg: &str) {
    log(Level::ERROR, scope, msg);
}
