//! Logging bootstrap.
//!
//! The parser only emits `tracing` events. Binaries that want them printed
//! call [`init`] once at startup, with the `tracing-subscriber` feature on.
//!
//! # Environment Variables
//!
//! - `S3URL_LOG=<directive>` - `EnvFilter` directive, e.g. `s3url_core=debug`
//! - `S3URL_LOG_FORMAT=pretty|compact|json` - output format (default: compact)

use std::env;
use std::sync::Once;

/// Filter directive variable.
pub const LOG_ENV: &str = "S3URL_LOG";

/// Output format variable.
pub const LOG_FORMAT_ENV: &str = "S3URL_LOG_FORMAT";

static INIT: Once = Once::new();

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human oriented.
    Pretty,
    /// Single line per event.
    #[default]
    Compact,
    /// Structured JSON.
    Json,
}

impl LogFormat {
    /// Read the format from `S3URL_LOG_FORMAT`.
    pub fn from_env() -> Self {
        env::var(LOG_FORMAT_ENV)
            .map(|value| Self::from_name(&value))
            .unwrap_or_default()
    }

    fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Initialize logging from `S3URL_LOG`. A no-op when the variable is unset.
pub fn init() {
    if let Ok(directive) = env::var(LOG_ENV) {
        init_with_filter(&directive);
    }
}

/// Initialize logging with an explicit filter directive.
///
/// Only the first call in a process has any effect.
pub fn init_with_filter(directive: &str) {
    INIT.call_once(|| install(directive, LogFormat::from_env()));
}

#[cfg(feature = "tracing-subscriber")]
fn install(directive: &str, format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Json => registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty().with_writer(std::io::stderr)).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact().with_writer(std::io::stderr)).try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(directive, ?format, "s3url logging initialized");
    }
}

#[cfg(not(feature = "tracing-subscriber"))]
fn install(_directive: &str, _format: LogFormat) {}
