//! Logging utilities for the salon crates.
//!
//! Library code only emits `tracing` events. Binaries call one of the `init`
//! functions once at start-up to install a subscriber.

use crate::error::{config_error, SalonError};
use salon_config::LoggingConfig;
use std::str::FromStr;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use salon_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honoured; the level given here is added as a directive for
/// every `salon*` target. Calling this more than once is harmless.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("salon={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    // try_init: a global subscriber may already be installed (tests, embedding apps)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize the tracing subscriber from the `[logging]` config section.
pub fn init_from_config(config: &LoggingConfig) -> Result<(), SalonError> {
    let level = parse_level(&config.level)?;
    init_with_level(level);
    Ok(())
}

/// Parses a level name (`trace`, `debug`, `info`, `warn`, `error`), case-insensitive.
pub fn parse_level(name: &str) -> Result<Level, SalonError> {
    Level::from_str(name.trim())
        .map_err(|_| config_error(format!("unknown log level '{}'", name)))
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
