//! Error type definitions.
//!
//! This module defines all error and diagnostic types used throughout the client.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::{EnumIter as EnumIterMacro, IntoStaticStr};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Category of a transport-level failure.
///
/// Each kind maps to the numeric libcurl error code for the same failure, so
/// callers can match on familiar numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransportErrorKind {
    UnsupportedProtocol,
    Builder,
    InvalidUrl,
    Resolve,
    Connect,
    Timeout,
    TooManyRedirects,
    Other,
    Request,
    Body,
    ContentDecoding,
}

impl TransportErrorKind {
    /// Numeric error code (libcurl `CURLcode` value).
    pub fn code(self) -> u32 {
        match self {
            TransportErrorKind::UnsupportedProtocol => 1,
            TransportErrorKind::Builder => 2,
            TransportErrorKind::InvalidUrl => 3,
            TransportErrorKind::Resolve => 6,
            TransportErrorKind::Connect => 7,
            TransportErrorKind::Timeout => 28,
            TransportErrorKind::TooManyRedirects => 47,
            TransportErrorKind::Other => 52,
            TransportErrorKind::Request => 55,
            TransportErrorKind::Body => 56,
            TransportErrorKind::ContentDecoding => 61,
        }
    }

    /// Short machine-readable name (e.g. `too_many_redirects`).
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A failure of the network exchange itself.
///
/// When this is returned no decomposition happened: there is no status, header,
/// or body section to inspect.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("transport error {code} ({}): {description}", .kind.as_str())]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub code: u32,
    pub description: String,
}

impl TransportError {
    /// Creates an error whose code is derived from its kind.
    pub fn new(kind: TransportErrorKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            code: kind.code(),
            description: description.into(),
        }
    }
}

/// Which part of the response a decode failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Header,
    Body,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Error types for text decoding of a response section.
///
/// Scoped to one section: a header decode failure leaves the body section intact,
/// and vice versa.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecodeError {
    /// The configured codec label is not a known encoding.
    #[error("unknown codec '{codec}' for {} section", .section.as_str())]
    UnknownCodec { section: Section, codec: String },

    /// The bytes are not valid in the configured encoding.
    #[error("{} bytes are not valid {codec}", .section.as_str())]
    InvalidBytes { section: Section, codec: String },
}

impl DecodeError {
    /// The section that failed to decode.
    pub fn section(&self) -> Section {
        match self {
            DecodeError::UnknownCodec { section, .. } | DecodeError::InvalidBytes { section, .. } => {
                *section
            }
        }
    }
}

/// A non-empty header line without a colon where a `name: value` pair was expected.
///
/// Not fatal: the line is skipped and the hop keeps its other headers.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("malformed header line in hop {hop}: {line:?}")]
pub struct MalformedHeaderLine {
    pub hop: usize,
    pub line: String,
}
