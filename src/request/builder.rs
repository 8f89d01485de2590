//! GET/POST request builders.

use log::debug;
use url::form_urlencoded;

use crate::config::{FORM_URLENCODED, HEADER_CONTENT_TYPE};

use super::types::{Method, Params, RequestSpec, TransportPolicy};

/// Encodes parameters as `application/x-www-form-urlencoded` (`a=1&b=x+y`).
///
/// Keys come out in lexicographic order; spaces become `+` and everything outside
/// the unreserved set is percent-encoded.
pub fn encode_params(params: &Params) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Builds a GET request with `params` appended as a query string.
///
/// With no parameters the URL is exactly `base_url`. Otherwise `?` and the encoded
/// parameters are appended verbatim; `base_url` is not inspected for an existing
/// query string.
pub fn build_get(base_url: &str, params: &Params, policy: &TransportPolicy) -> RequestSpec {
    let url = if params.is_empty() {
        base_url.to_string()
    } else {
        format!("{}?{}", base_url, encode_params(params))
    };
    debug!("Built GET request for {url}");

    RequestSpec {
        method: Method::Get,
        url,
        headers: Vec::new(),
        body: None,
        policy: policy.clone(),
    }
}

/// Builds a POST request whose body is the form-encoded `params`.
pub fn build_post(base_url: &str, params: &Params, policy: &TransportPolicy) -> RequestSpec {
    let body = encode_params(params);
    debug!(
        "Built POST request for {base_url} ({} byte form body)",
        body.len()
    );

    RequestSpec {
        method: Method::Post,
        url: base_url.to_string(),
        headers: vec![(HEADER_CONTENT_TYPE.to_string(), FORM_URLENCODED.to_string())],
        body: Some(body),
        policy: policy.clone(),
    }
}
