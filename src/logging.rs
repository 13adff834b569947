//! Tracing subscriber setup.

use crate::constants::{DEBUG_LOG_LEVEL, DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON};
use tracing_subscriber::EnvFilter;

/// Builds the level filter: `RUST_LOG` when set, otherwise `warn`, or
/// `debug` when `debug` is true.
pub fn env_filter(debug: bool) -> EnvFilter {
    let level = if debug { DEBUG_LOG_LEVEL } else { DEFAULT_LOG_LEVEL };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber writing to stderr.
///
/// `format` is `"json"` for one JSON object per event; anything else gives
/// human-readable text. Calling this twice leaves the first subscriber in
/// place.
pub fn init(debug: bool, format: &str) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if format == LOG_FORMAT_JSON {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
