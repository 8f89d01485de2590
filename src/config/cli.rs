//! Command-line options for the `postboy` binary.

use std::time::Duration;

use clap::Parser;

use crate::config::constants::{
    CONNECT_TIMEOUT, DEFAULT_CODEC, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, REQUEST_TIMEOUT,
};
use crate::config::types::{ClientConfig, HttpVersionPin, LogFormat, LogLevel, OutputFormat};
use crate::request::{Method, Params};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # GET with query parameters, JSON output
/// postboy http://www.example.com --param q=rust --param page=2
///
/// # Form POST, human-readable summary
/// postboy http://127.0.0.1:5000/post_test --method post --param username=meng --output summary
///
/// # GBK-encoded site, redirects not followed
/// postboy http://www.example.cn --codec gbk --no-follow
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "postboy",
    about = "Sends one HTTP request and decomposes the response into status, per-hop headers and HTML fragments."
)]
pub struct Opt {
    /// Target URL
    pub url: String,

    /// HTTP method: get|post
    #[arg(long, value_enum, default_value_t = Method::Get)]
    pub method: Method,

    /// Request parameter as key=value (repeatable)
    ///
    /// Sent as the query string for GET and as a form-encoded body for POST.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Encoding label used to decode the response (e.g. utf-8, gbk, latin1)
    #[arg(long, default_value = DEFAULT_CODEC)]
    pub codec: String,

    /// TCP connect timeout in seconds
    #[arg(long, default_value_t = CONNECT_TIMEOUT.as_secs())]
    pub connect_timeout_secs: u64,

    /// Total request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Do not follow redirects
    #[arg(long)]
    pub no_follow: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// HTTP version to request: 1.0|1.1|auto
    #[arg(long, value_enum, default_value_t = HttpVersionPin::Http10)]
    pub http_version: HttpVersionPin,

    /// Output format: json|summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the client configuration described by these options.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            follow_redirects: !self.no_follow,
            max_redirects: self.max_redirects,
            user_agent: self.user_agent.clone(),
            http_version: self.http_version,
            codec: self.codec.clone(),
        }
    }

    /// Collects `--param` pairs into request parameters. A repeated key keeps its last value.
    pub fn params(&self) -> Params {
        self.params.iter().cloned().collect()
    }
}

/// Parses a `key=value` argument. The value may be empty or contain further `=`.
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("empty key in '{arg}'")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{arg}'")),
    }
}
