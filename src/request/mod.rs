//! Request construction.
//!
//! This module turns a base URL and a flat parameter mapping into an immutable
//! `RequestSpec`. No I/O happens here; the transport executes the spec.

mod builder;
mod types;

pub use builder::{build_get, build_post, encode_params};
pub use types::{Method, Params, RequestSpec, TransportPolicy};
