//! Logger initialization.
//!
//! This module provides the function that installs `env_logger` with the
//! client's plain or JSON formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Dependency modules whose output is capped at info, whatever the CLI level.
///
/// At debug they log connection-pool and framing internals on every hop.
const CAPPED_MODULES: &[&str] = &["reqwest", "hyper", "hyper_util"];

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then applies to postboy's own modules and to
/// anything `RUST_LOG` does not name. What postboy logs at each level:
/// - `warn`: skipped malformed header lines and sections that failed to decode
/// - `debug`: every request sent, every redirect followed, and per-section sizes
///
/// `reqwest`, `hyper` and `hyper_util` stay at info even under `--log-level debug`.
/// Log records go to stderr, so stdout carries only the printed result.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Request and redirect trail for one call
/// postboy http://example.com --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=postboy::response=debug postboy http://example.com --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    logger_builder(level, format)
        .try_init()
        .map_err(InitializationError::from)
}

/// Builds the `env_logger` configuration installed by `init_logger_with`.
fn logger_builder(level: LevelFilter, format: LogFormat) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for module in CAPPED_MODULES {
        builder.filter_module(module, level.min(LevelFilter::Info));
    }
    builder.filter_module("postboy", level);

    match format {
        LogFormat::Json => {
            // One object per line: {"ts":<epoch ms>,"level":..,"target":..,"msg":..}
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}
