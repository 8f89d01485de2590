//! Configuration constants.
//!
//! Defaults for the transport policy applied to every request. These are the values
//! `ClientConfig::default()` starts from; callers override them per client.

use std::time::Duration;

// Network operation timeouts
/// TCP connection timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Total request timeout (connect + transfer)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Redirect handling
/// Whether `3xx` responses with a `Location` header are followed
pub const FOLLOW_REDIRECTS: bool = true;
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// Pinned to a desktop Chrome build so servers that sniff the agent serve their
/// regular HTML pages instead of a bot/fallback variant.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/44.0.2403.157 Safari/537.36";

/// Scheme assumed for URLs given without one (e.g. `www.example.com`)
pub const DEFAULT_SCHEME: &str = "http";

/// Default codec label used to decode header and body bytes (WHATWG encoding label)
pub const DEFAULT_CODEC: &str = "utf-8";

// HTTP status codes that trigger redirect following
pub const HTTP_STATUS_MOVED_PERMANENTLY: u16 = 301;
pub const HTTP_STATUS_FOUND: u16 = 302;
pub const HTTP_STATUS_SEE_OTHER: u16 = 303;
pub const HTTP_STATUS_TEMPORARY_REDIRECT: u16 = 307;
pub const HTTP_STATUS_PERMANENT_REDIRECT: u16 = 308;
