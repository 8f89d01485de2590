//! Caller-facing client.

use log::debug;

use crate::config::ClientConfig;
use crate::error_handling::{InitializationError, TransportError};
use crate::fetch::{ReqwestTransport, Transport};
use crate::request::{build_get, build_post, Params, RequestSpec, TransportPolicy};
use crate::response::{decompose, Decomposition};

/// HTTP client that decomposes every response it receives.
///
/// A client holds only its configuration and transport. Each call builds a fresh
/// request and fresh buffers, so one client can serve any number of sequential
/// calls, or parallel calls when the transport is `Sync`.
///
/// # Example
///
/// ```no_run
/// use postboy::{Client, ClientConfig, Params};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(ClientConfig::default())?;
/// let result = client.get("http://www.example.com", &Params::new())?;
/// if let Ok(data) = &result.data {
///     println!("title: {:?}", data.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    policy: TransportPolicy,
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Creates a client backed by `ReqwestTransport`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, InitializationError> {
        let policy = TransportPolicy::from(&config);
        let transport = ReqwestTransport::new(&policy)?;
        Ok(Self {
            config,
            policy,
            transport,
        })
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that executes requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let policy = TransportPolicy::from(&config);
        Self {
            config,
            policy,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a GET request with `params` as the query string.
    ///
    /// # Errors
    ///
    /// Returns the transport's `TransportError` untouched if the exchange fails.
    pub fn get(&self, url: &str, params: &Params) -> Result<Decomposition, TransportError> {
        self.perform(&build_get(url, params, &self.policy))
    }

    /// Issues a POST request with `params` as a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns the transport's `TransportError` untouched if the exchange fails.
    pub fn post(&self, url: &str, params: &Params) -> Result<Decomposition, TransportError> {
        self.perform(&build_post(url, params, &self.policy))
    }

    /// Executes a prepared request and decomposes the response.
    ///
    /// Decomposition only runs once the transport reports a completed exchange.
    pub fn perform(&self, request: &RequestSpec) -> Result<Decomposition, TransportError> {
        let response = self.transport.execute(request).inspect_err(|e| {
            debug!("{} {} failed: {}", request.method, request.url, e);
        })?;

        Ok(decompose(
            response.status_code,
            &response.effective_url,
            &response.raw_headers,
            &response.raw_body,
            &self.config.codec,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::error_handling::TransportErrorKind;
    use crate::fetch::TransportResponse;
    use crate::request::Method;

    /// Replays a fixed outcome and records every request it receives.
    struct CannedTransport {
        outcome: Result<TransportResponse, TransportError>,
        seen: Mutex<Vec<RequestSpec>>,
    }

    impl CannedTransport {
        fn new(outcome: Result<TransportResponse, TransportError>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<RequestSpec> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Transport for CannedTransport {
        fn execute(&self, request: &RequestSpec) -> Result<TransportResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    fn page_response() -> TransportResponse {
        TransportResponse {
            status_code: 200,
            effective_url: "http://www.example.com/".to_string(),
            raw_headers: b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n".to_vec(),
            raw_body: b"<html><head><title>Example</title></head><body>hi</body></html>".to_vec(),
        }
    }

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_decomposes_response() {
        let transport = CannedTransport::new(Ok(page_response()));
        let client = Client::with_transport(ClientConfig::default(), &transport);

        let result = client
            .get("http://www.example.com", &Params::new())
            .expect("canned success");
        assert_eq!(result.status.http_code, 200);
        assert_eq!(result.status.zone.as_deref(), Some("www.example.com"));
        assert_eq!(result.header.as_ref().map(|h| h.parts), Ok(1));
        assert_eq!(
            result.data.as_ref().ok().and_then(|d| d.title.as_deref()),
            Some("Example")
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "http://www.example.com");
    }

    #[test]
    fn test_post_sends_form_body() {
        let transport = CannedTransport::new(Ok(page_response()));
        let client = Client::with_transport(ClientConfig::default(), &transport);

        client
            .post("http://127.0.0.1:5000/post_test", &params(&[("username", "meng")]))
            .expect("canned success");

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body.as_deref(), Some("username=meng"));
        assert_eq!(requests[0].url, "http://127.0.0.1:5000/post_test");
    }

    #[test]
    fn test_transport_error_passes_through_untouched() {
        let error = TransportError::new(
            TransportErrorKind::Resolve,
            "Could not resolve host: nowhere.invalid",
        );
        let transport = CannedTransport::new(Err(error.clone()));
        let client = Client::with_transport(ClientConfig::default(), &transport);

        let result = client.get("http://nowhere.invalid", &Params::new());
        assert_eq!(result, Err(error));
    }

    #[test]
    fn test_requests_carry_configured_policy() {
        let config = ClientConfig {
            max_redirects: 2,
            follow_redirects: false,
            user_agent: "postboy-test".to_string(),
            ..ClientConfig::default()
        };
        let transport = CannedTransport::new(Ok(page_response()));
        let client = Client::with_transport(config, &transport);

        client.get("http://www.example.com", &Params::new()).unwrap();
        let policy = &transport.requests()[0].policy;
        assert_eq!(policy.max_redirects, 2);
        assert!(!policy.follow_redirects);
        assert_eq!(policy.user_agent, "postboy-test");
    }

    #[test]
    fn test_configured_codec_is_used() {
        let mut response = page_response();
        // "<title>中文</title>" in GBK
        response.raw_body = [
            b"<title>".as_slice(),
            [0xd6, 0xd0, 0xce, 0xc4].as_slice(),
            b"</title>".as_slice(),
        ]
        .concat();
        let transport = CannedTransport::new(Ok(response));

        let config = ClientConfig {
            codec: "gbk".to_string(),
            ..ClientConfig::default()
        };
        let client = Client::with_transport(config, &transport);
        let result = client.get("http://www.example.com", &Params::new()).unwrap();
        assert_eq!(
            result.data.as_ref().ok().and_then(|d| d.title.as_deref()),
            Some("中文")
        );

        let utf8_client = Client::with_transport(ClientConfig::default(), &transport);
        let result = utf8_client
            .get("http://www.example.com", &Params::new())
            .unwrap();
        assert!(result.data.is_err());
        assert!(result.header.is_ok());
    }

    #[test]
    fn test_repeated_calls_do_not_accumulate() {
        let transport = CannedTransport::new(Ok(page_response()));
        let client = Client::with_transport(ClientConfig::default(), &transport);

        let first = client.get("http://www.example.com", &Params::new()).unwrap();
        let second = client.get("http://www.example.com", &Params::new()).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.header.as_ref().map(|h| h.parts), Ok(1));
    }
}
