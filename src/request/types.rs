//! Request description types.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::{ClientConfig, HttpVersionPin};

/// Flat key→value request parameters.
///
/// A `BTreeMap` keeps the keys in lexicographic order, so encoding the same
/// mapping always produces the same query string or form body.
pub type Params = BTreeMap<String, String>;

/// HTTP method supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport policy attached to every request.
///
/// `ReqwestTransport` reads `timeout`, `follow_redirects`, `max_redirects`,
/// `user_agent` and `http_version` from each request. `connect_timeout` is fixed
/// when the transport is built, and a request asking for another value is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportPolicy {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub follow_redirects: bool,
    pub max_redirects: usize,
    pub user_agent: String,
    pub http_version: HttpVersionPin,
}

impl From<&ClientConfig> for TransportPolicy {
    fn from(config: &ClientConfig) -> Self {
        Self {
            connect_timeout: config.connect_timeout,
            timeout: config.timeout,
            follow_redirects: config.follow_redirects,
            max_redirects: config.max_redirects,
            user_agent: config.user_agent.clone(),
            http_version: config.http_version,
        }
    }
}

impl Default for TransportPolicy {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

/// Immutable description of one request, ready for a transport to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSpec {
    pub method: Method,
    /// Target URL, query string included for GET requests
    pub url: String,
    /// Extra request headers as `(name, value)` pairs
    pub headers: Vec<(String, String)>,
    /// Form-encoded body for POST requests
    pub body: Option<String>,
    pub policy: TransportPolicy,
}

impl RequestSpec {
    /// Returns the value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
