//! Observability for studentdesk
//!
//! Installs the global `tracing` subscriber. Filtering follows `RUST_LOG`
//! and falls back to `info`. Lines go to stderr, leaving stdout to command
//! output. Output is human-readable text, or one JSON
//! object per line when requested.
//!
//! # Usage
//!
//! ```ignore
//! use studentdesk::observability::{init_logging, LogFormat};
//!
//! init_logging(LogFormat::Json);
//! tracing::info!(id = 6, "student created");
//! ```

use tracing_subscriber::EnvFilter;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Build the filter from `RUST_LOG`, defaulting to `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// Returns false if a subscriber was already installed (for example by a
/// test harness); logging then goes to the existing one.
pub fn init_logging(format: LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    }
}
