//! postboy library: an HTTP client that decomposes what it receives
//!
//! Every request returns a structured `Decomposition` of the response:
//! - **Status**: final status code, effective URL after redirects, and its zone (bare host)
//! - **Header**: the raw header text split into one entry per redirect hop, with
//!   repeated headers folded into lists
//! - **Data**: the decoded body plus its `<title>`, `<head>` and `<body>` fragments
//!
//! Header and body are decoded independently with a configurable codec, so a
//! page in the wrong encoding still yields its headers.
//!
//! # Example
//!
//! ```no_run
//! use postboy::Params;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut params = Params::new();
//! params.insert("username".to_string(), "meng".to_string());
//!
//! let result = postboy::post("http://127.0.0.1:5000/post_test", &params)?;
//! println!("{} {}", result.status.http_code, result.status.url);
//! if let Ok(header) = &result.header {
//!     for hop in &header.hops {
//!         println!("{} {}", hop.protocol, hop.status_code);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The client is blocking. Do not call it from inside an async runtime's worker
//! threads; use a dedicated thread instead.

pub mod app;
mod client;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod request;
pub mod response;

// Re-export public API
pub use client::Client;
pub use config::{ClientConfig, HttpVersionPin, LogFormat, LogLevel};
pub use error_handling::{
    DecodeError, InitializationError, MalformedHeaderLine, TransportError, TransportErrorKind,
};
pub use fetch::{ReqwestTransport, Transport, TransportResponse};
pub use request::{Method, Params, RequestSpec};
pub use response::{
    decompose, Decomposition, HeaderHop, HeaderValue, ParsedBody, ParsedHeaders, StatusInfo,
};

/// Issues a GET request with a default client.
///
/// # Errors
///
/// Returns a `TransportError` if the exchange fails. A client that cannot be
/// built is reported as `TransportErrorKind::Builder`.
pub fn get(url: &str, params: &Params) -> Result<Decomposition, TransportError> {
    default_client()?.get(url, params)
}

/// Issues a form POST request with a default client.
///
/// # Errors
///
/// Returns a `TransportError` if the exchange fails. A client that cannot be
/// built is reported as `TransportErrorKind::Builder`.
pub fn post(url: &str, params: &Params) -> Result<Decomposition, TransportError> {
    default_client()?.post(url, params)
}

fn default_client() -> Result<Client, TransportError> {
    Client::new(ClientConfig::default())
        .map_err(|e| TransportError::new(TransportErrorKind::Builder, e.to_string()))
}
