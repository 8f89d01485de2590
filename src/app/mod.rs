//! Command-line front end helpers.
//!
//! Output formatting used by the `postboy` binary.

pub mod summary;

pub use summary::{format_summary, format_transport_error};
