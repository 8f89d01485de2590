//! Resource initialization.
//!
//! This module provides functions to initialize shared resources:
//! - The blocking HTTP client used by the default transport
//! - The logger used by the command-line front end
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
