//! Client configuration and constants.
//!
//! This module provides:
//! - Default transport policy values (timeouts, redirect cap, user agent)
//! - HTTP header name constants used when building requests
//! - Configuration types (`ClientConfig`, logging options, HTTP version pin)
//! - Command-line options (`Opt`) for the binary

mod cli;
mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use cli::{parse_param, Opt};
pub use types::{ClientConfig, HttpVersionPin, LogFormat, LogLevel, OutputFormat};
