//! Configuration types.
//!
//! This module defines the library-facing `ClientConfig` and the enums shared with
//! the command-line front end.

use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::constants::{
    CONNECT_TIMEOUT, DEFAULT_CODEC, DEFAULT_USER_AGENT, FOLLOW_REDIRECTS, MAX_REDIRECT_HOPS,
    REQUEST_TIMEOUT,
};

/// Log verbosity of the `postboy` binary.
///
/// Applies to postboy's own modules; `reqwest` and `hyper` never go above info.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Logger and client setup failures only
    Error,
    /// Also skipped header lines and sections that failed to decode (default)
    Warn,
    /// Also transport-level informational messages
    Info,
    /// Also each request, redirect and decomposition size
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log record format on stderr.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// `target [LEVEL] message`, colored when stderr is a terminal
    Plain,
    /// One JSON object per line with `ts`, `level`, `target` and `msg`
    Json,
}

/// Output format of the command-line front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The full decomposition as pretty-printed JSON
    Json,
    /// Status, hop list and title as plain text
    Summary,
}

/// HTTP protocol version requested from the server.
///
/// Legacy servers that mishandle HTTP/1.1 framing still answer HTTP/1.0 requests
/// correctly, which is why `Http10` is the default. `Auto` lets the transport negotiate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
pub enum HttpVersionPin {
    /// Send HTTP/1.0 requests
    #[value(name = "1.0")]
    Http10,
    /// Send HTTP/1.1 requests
    #[value(name = "1.1")]
    Http11,
    /// Let the transport pick the version
    Auto,
}

impl HttpVersionPin {
    /// Returns the `reqwest` version to force on the request, if any.
    pub fn as_reqwest_version(self) -> Option<reqwest::Version> {
        match self {
            HttpVersionPin::Http10 => Some(reqwest::Version::HTTP_10),
            HttpVersionPin::Http11 => Some(reqwest::Version::HTTP_11),
            HttpVersionPin::Auto => None,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// Holds the transport policy applied to every request built by a client, and the
/// codec used to decode the response.
///
/// # Examples
///
/// ```no_run
/// use postboy::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig {
///     timeout: Duration::from_secs(30),
///     max_redirects: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientConfig {
    /// TCP connect timeout
    pub connect_timeout: Duration,

    /// Total per-request timeout
    pub timeout: Duration,

    /// Follow `3xx` responses carrying a `Location` header
    pub follow_redirects: bool,

    /// Maximum number of redirects followed before giving up
    pub max_redirects: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Protocol version requested from servers
    pub http_version: HttpVersionPin,

    /// Encoding label used to decode header and body bytes (e.g. `utf-8`, `gbk`)
    pub codec: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            timeout: REQUEST_TIMEOUT,
            follow_redirects: FOLLOW_REDIRECTS,
            max_redirects: MAX_REDIRECT_HOPS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_version: HttpVersionPin::Http10,
            codec: DEFAULT_CODEC.to_string(),
        }
    }
}
