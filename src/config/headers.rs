//! HTTP header name and value constants.

/// Content-Type header
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Content type of POST bodies produced by the request builder
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
