//! `reqwest`-backed transport.

use std::time::{Duration, Instant};

use hyper::ext::ReasonPhrase;
use log::debug;
use reqwest::header::{LOCATION, USER_AGENT};
use reqwest::Url;

use crate::config::HEADER_CONTENT_TYPE;
use crate::error_handling::{
    transport_error_from_reqwest, InitializationError, TransportError, TransportErrorKind,
};
use crate::initialization::init_client;
use crate::request::{Method, RequestSpec, TransportPolicy};

use super::hop::append_hop;
use super::redirects::{is_redirect, method_after_redirect, parse_target, resolve_location};
use super::{Transport, TransportResponse};

/// Blocking transport on top of `reqwest`.
///
/// The underlying client has automatic redirects disabled; `execute` follows
/// them itself so that the status line and headers of every hop end up in the
/// raw header block.
///
/// The connect timeout is fixed when the client is built, so `execute` rejects a
/// request whose policy asks for a different one. The total timeout, user agent
/// and version pin are taken from each request.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    connect_timeout: Duration,
}

impl ReqwestTransport {
    /// Builds a transport whose client uses `policy`'s connect timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(policy: &TransportPolicy) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(policy)?,
            connect_timeout: policy.connect_timeout,
        })
    }

    /// Connect timeout baked into the underlying client.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    fn send(
        &self,
        method: Method,
        url: &Url,
        body: Option<&str>,
        request: &RequestSpec,
        timeout: Duration,
    ) -> Result<reqwest::blocking::Response, TransportError> {
        let mut builder = match method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
        }
        .timeout(timeout)
        .header(USER_AGENT, request.policy.user_agent.as_str());

        if let Some(version) = request.policy.http_version.as_reqwest_version() {
            builder = builder.version(version);
        }

        for (name, value) in &request.headers {
            // A POST turned into a GET by a redirect no longer has a form body
            if body.is_none() && name.eq_ignore_ascii_case(HEADER_CONTENT_TYPE) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        builder
            .send()
            .map_err(|e| transport_error_from_reqwest(&e))
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &RequestSpec) -> Result<TransportResponse, TransportError> {
        let policy = &request.policy;
        if policy.connect_timeout != self.connect_timeout {
            return Err(TransportError::new(
                TransportErrorKind::Builder,
                format!(
                    "connect timeout {:?} differs from the {:?} this transport was built with",
                    policy.connect_timeout, self.connect_timeout
                ),
            ));
        }

        let started = Instant::now();
        let deadline = started + policy.timeout;

        let mut current = parse_target(&request.url)?;
        let mut method = request.method;
        let mut body = request.body.clone();
        let mut raw_headers = Vec::new();
        let mut redirects = 0usize;

        loop {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .filter(|d| !d.is_zero())
                .ok_or_else(|| {
                    TransportError::new(
                        TransportErrorKind::Timeout,
                        format!(
                            "Operation timed out after {} milliseconds",
                            started.elapsed().as_millis()
                        ),
                    )
                })?;

            debug!("{method} {current} (hop {redirects})");
            let response = self.send(method, &current, body.as_deref(), request, remaining)?;
            let status = response.status();
            // Only present when the server's phrase differs from the canonical one
            let reason = response
                .extensions()
                .get::<ReasonPhrase>()
                .map(ReasonPhrase::as_bytes);
            append_hop(
                &mut raw_headers,
                response.version(),
                status,
                reason,
                response.headers(),
            );

            let location = if policy.follow_redirects && is_redirect(status.as_u16()) {
                response
                    .headers()
                    .get(LOCATION)
                    .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            } else {
                None
            };

            let Some(location) = location else {
                let raw_body = response
                    .bytes()
                    .map_err(|e| transport_error_from_reqwest(&e))?
                    .to_vec();
                debug!(
                    "{} {current} after {redirects} redirect(s), {} header bytes, {} body bytes",
                    status.as_u16(),
                    raw_headers.len(),
                    raw_body.len()
                );
                return Ok(TransportResponse {
                    status_code: status.as_u16(),
                    effective_url: current.to_string(),
                    raw_headers,
                    raw_body,
                });
            };

            if redirects >= policy.max_redirects {
                return Err(TransportError::new(
                    TransportErrorKind::TooManyRedirects,
                    format!("Maximum ({}) redirects followed", policy.max_redirects),
                ));
            }

            let next = resolve_location(&current, &location)?;
            let next_method = method_after_redirect(status.as_u16(), method);
            if next_method != method {
                body = None;
            }
            debug!(
                "Redirect {} from {current} to {next} ({method} -> {next_method})",
                status.as_u16()
            );

            redirects += 1;
            method = next_method;
            current = next;
        }
    }
}
