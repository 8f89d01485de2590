//! Error categorization.
//!
//! This module maps `reqwest` failures onto the transport error taxonomy.

use std::error::Error as StdError;

use super::types::{TransportError, TransportErrorKind};

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// DNS failures surface from reqwest as connect errors; they are told apart by
/// walking the source chain for the resolver's message.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_redirect() {
        TransportErrorKind::TooManyRedirects
    } else if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        if is_resolve_failure(error) {
            TransportErrorKind::Resolve
        } else {
            TransportErrorKind::Connect
        }
    } else if error.is_request() {
        TransportErrorKind::Request
    } else if error.is_body() {
        TransportErrorKind::Body
    } else if error.is_decode() {
        TransportErrorKind::ContentDecoding
    } else {
        TransportErrorKind::Other
    }
}

/// Converts a `reqwest::Error` into a `TransportError`.
///
/// The description is the full source chain, since reqwest's top-level message
/// ("error sending request for url ...") rarely says what actually went wrong.
pub fn transport_error_from_reqwest(error: &reqwest::Error) -> TransportError {
    TransportError::new(categorize_reqwest_error(error), error_chain_message(error))
}

/// Joins an error and all of its sources into a single `a: b: c` message.
pub(crate) fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        // hyper and reqwest often repeat the inner message verbatim
        if !message.ends_with(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

fn is_resolve_failure(error: &(dyn StdError + 'static)) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(cause) = source {
        let text = cause.to_string().to_lowercase();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return true;
        }
        source = cause.source();
    }
    false
}
