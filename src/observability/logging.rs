//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Derive the default filter from the configured log level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` takes precedence over the configured level
//! - Logs go to stderr so command output on stdout stays machine-readable

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives for a log level.
pub fn default_directives(level: &str) -> String {
    format!("operadora_routes={level},tower_http={level}")
}

/// Install the global subscriber.
pub fn init(level: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
