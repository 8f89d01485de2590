//! Redirect handling.
//!
//! Redirects are followed manually so every intermediate hop can be recorded.

use std::borrow::Cow;

use reqwest::Url;

use crate::config::{
    DEFAULT_SCHEME, HTTP_STATUS_FOUND, HTTP_STATUS_MOVED_PERMANENTLY, HTTP_STATUS_PERMANENT_REDIRECT,
    HTTP_STATUS_SEE_OTHER, HTTP_STATUS_TEMPORARY_REDIRECT,
};
use crate::error_handling::{TransportError, TransportErrorKind};
use crate::request::Method;

/// Whether `status` is one of the redirect codes we follow (301, 302, 303, 307, 308).
pub(crate) fn is_redirect(status: u16) -> bool {
    matches!(
        status,
        HTTP_STATUS_MOVED_PERMANENTLY
            | HTTP_STATUS_FOUND
            | HTTP_STATUS_SEE_OTHER
            | HTTP_STATUS_TEMPORARY_REDIRECT
            | HTTP_STATUS_PERMANENT_REDIRECT
    )
}

/// Method used for the request that follows a redirect.
///
/// 303 always becomes GET; 301 and 302 turn a POST into a GET (what browsers
/// and curl do); 307 and 308 replay the original method and body.
pub(crate) fn method_after_redirect(status: u16, method: Method) -> Method {
    match (status, method) {
        (HTTP_STATUS_SEE_OTHER, _) => Method::Get,
        (HTTP_STATUS_MOVED_PERMANENTLY | HTTP_STATUS_FOUND, Method::Post) => Method::Get,
        (_, method) => method,
    }
}

/// Parses a URL the transport is about to request.
///
/// A URL without `://` is taken as `http://` plus the URL, so `www.example.com`
/// and `127.0.0.1:8080/x` are plain HTTP targets.
///
/// # Errors
///
/// `InvalidUrl` if `url` does not parse, `UnsupportedProtocol` if its scheme is
/// not `http` or `https`.
pub(crate) fn parse_target(url: &str) -> Result<Url, TransportError> {
    let target = if url.contains("://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME}://{url}"))
    };
    let parsed = Url::parse(&target).map_err(|e| {
        TransportError::new(
            TransportErrorKind::InvalidUrl,
            format!("URL '{url}' could not be parsed: {e}"),
        )
    })?;
    ensure_http(parsed)
}

/// Resolves a `Location` header value against the URL that returned it.
pub(crate) fn resolve_location(current: &Url, location: &str) -> Result<Url, TransportError> {
    let next = Url::parse(location)
        .or_else(|_| current.join(location))
        .map_err(|e| {
            TransportError::new(
                TransportErrorKind::InvalidUrl,
                format!("redirect Location '{location}' from {current} is not a valid URL: {e}"),
            )
        })?;
    ensure_http(next)
}

fn ensure_http(url: Url) -> Result<Url, TransportError> {
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(TransportError::new(
            TransportErrorKind::UnsupportedProtocol,
            format!("Protocol \"{scheme}\" not supported: {url}"),
        )),
    }
}
