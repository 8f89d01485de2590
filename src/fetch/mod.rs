//! Request execution.
//!
//! The `Transport` trait is the seam between request construction and response
//! decomposition: it performs the network exchange and hands back raw bytes.
//! `ReqwestTransport` is the default implementation.

mod hop;
mod redirects;
mod transport;

use serde::Serialize;

use crate::error_handling::TransportError;
use crate::request::RequestSpec;

pub use transport::ReqwestTransport;

/// Raw outcome of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportResponse {
    /// Status code of the final hop
    pub status_code: u16,
    /// URL of the final hop, after redirects
    pub effective_url: String,
    /// Status line and headers of every hop, each block terminated by a blank line
    pub raw_headers: Vec<u8>,
    /// Body of the final hop
    pub raw_body: Vec<u8>,
}

/// Performs the network exchange described by a `RequestSpec`.
///
/// Implementations own all blocking I/O and must honor the request's
/// `TransportPolicy` (timeouts, redirect policy, version pin, user agent).
pub trait Transport {
    /// Executes `request`, following redirects if its policy says so.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` when the exchange itself fails (DNS, connect,
    /// timeout, redirect limit, ...). An HTTP error status is not a failure.
    fn execute(&self, request: &RequestSpec) -> Result<TransportResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &RequestSpec) -> Result<TransportResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &RequestSpec) -> Result<TransportResponse, TransportError> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests;
