// Fetch module tests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url, Version};

use super::hop::{append_hop, status_label, version_label};
use super::redirects::{is_redirect, method_after_redirect, parse_target, resolve_location};
use super::{ReqwestTransport, Transport};
use crate::error_handling::TransportErrorKind;
use crate::request::{build_get, Method, Params, TransportPolicy};
use crate::response::split_headers;

fn add_header(headers: &mut HeaderMap, name: &str, value: &str) {
    // In tests, we use known-good header names and values
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .unwrap_or_else(|_| panic!("Invalid header name in test: {}", name));
    let header_value = HeaderValue::from_str(value)
        .unwrap_or_else(|_| panic!("Invalid header value in test: {}", value));
    headers.append(header_name, header_value);
}

#[test]
fn test_append_hop_writes_status_line_and_headers() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "Content-Type", "text/html");
    add_header(&mut headers, "Set-Cookie", "a=1");
    add_header(&mut headers, "Set-Cookie", "b=2");

    let mut raw = Vec::new();
    append_hop(&mut raw, Version::HTTP_11, StatusCode::OK, None, &headers);

    assert_eq!(
        String::from_utf8(raw).unwrap(),
        "HTTP/1.1 200 OK\r\ncontent-type: text/html\r\nset-cookie: a=1\r\nset-cookie: b=2\r\n\r\n"
    );
}

#[test]
fn test_append_hop_output_splits_back_into_hops() {
    let mut redirect_headers = HeaderMap::new();
    add_header(&mut redirect_headers, "Location", "/next");
    let mut final_headers = HeaderMap::new();
    add_header(&mut final_headers, "Server", "test");

    let mut raw = Vec::new();
    append_hop(&mut raw, Version::HTTP_10, StatusCode::FOUND, None, &redirect_headers);
    append_hop(&mut raw, Version::HTTP_10, StatusCode::OK, None, &final_headers);

    let parsed = split_headers(&String::from_utf8(raw).unwrap());
    assert_eq!(parsed.parts, 2);
    assert_eq!(parsed.hops[0].protocol, "HTTP/1.0");
    assert_eq!(parsed.hops[0].status_code, "302 Found");
    assert_eq!(
        parsed.hops[0].header("location").map(|v| v.first()),
        Some("/next")
    );
    assert_eq!(parsed.hops[1].status_code, "200 OK");
}

#[test]
fn test_append_hop_copies_value_bytes_verbatim() {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-raw"),
        HeaderValue::from_bytes(&[0x63, 0x61, 0x66, 0xe9]).unwrap(),
    );
    let mut raw = Vec::new();
    append_hop(&mut raw, Version::HTTP_11, StatusCode::OK, None, &headers);
    assert!(raw.windows(4).any(|w| w == [0x63, 0x61, 0x66, 0xe9]));
}

#[test]
fn test_append_hop_keeps_server_reason_phrase() {
    let mut raw = Vec::new();
    append_hop(
        &mut raw,
        Version::HTTP_10,
        StatusCode::OK,
        Some(b"Everything Fine".as_slice()),
        &HeaderMap::new(),
    );
    assert_eq!(String::from_utf8(raw.clone()).unwrap(), "HTTP/1.0 200 Everything Fine\r\n\r\n");

    let parsed = split_headers(&String::from_utf8(raw).unwrap());
    assert_eq!(parsed.hops[0].protocol, "HTTP/1.0");
    assert_eq!(parsed.hops[0].status_code, "200 Everything Fine");
}

#[test]
fn test_version_and_status_labels() {
    assert_eq!(version_label(Version::HTTP_10), "HTTP/1.0");
    assert_eq!(version_label(Version::HTTP_11), "HTTP/1.1");
    assert_eq!(version_label(Version::HTTP_2), "HTTP/2");
    assert_eq!(status_label(StatusCode::MOVED_PERMANENTLY), "301 Moved Permanently");
    assert_eq!(status_label(StatusCode::from_u16(599).unwrap()), "599");
}

#[test]
fn test_is_redirect() {
    for status in [301, 302, 303, 307, 308] {
        assert!(is_redirect(status), "{status} should redirect");
    }
    for status in [200, 204, 300, 304, 305, 404, 500] {
        assert!(!is_redirect(status), "{status} should not redirect");
    }
}

#[test]
fn test_method_after_redirect() {
    assert_eq!(method_after_redirect(303, Method::Post), Method::Get);
    assert_eq!(method_after_redirect(301, Method::Post), Method::Get);
    assert_eq!(method_after_redirect(302, Method::Post), Method::Get);
    assert_eq!(method_after_redirect(307, Method::Post), Method::Post);
    assert_eq!(method_after_redirect(308, Method::Post), Method::Post);
    assert_eq!(method_after_redirect(302, Method::Get), Method::Get);
}

#[test]
fn test_resolve_location_absolute_and_relative() {
    let current = Url::parse("http://example.com/a/b?x=1").unwrap();
    assert_eq!(
        resolve_location(&current, "https://other.org/c").unwrap().as_str(),
        "https://other.org/c"
    );
    assert_eq!(
        resolve_location(&current, "/root").unwrap().as_str(),
        "http://example.com/root"
    );
    assert_eq!(
        resolve_location(&current, "sibling").unwrap().as_str(),
        "http://example.com/a/sibling"
    );
}

#[test]
fn test_resolve_location_rejects_other_schemes() {
    let current = Url::parse("http://example.com/").unwrap();
    let err = resolve_location(&current, "ftp://files.example.org/x").unwrap_err();
    assert_eq!(err.kind, TransportErrorKind::UnsupportedProtocol);
    assert_eq!(err.code, 1);
}

#[test]
fn test_parse_target_defaults_to_http() {
    assert_eq!(
        parse_target("example.com/no-scheme").unwrap().as_str(),
        "http://example.com/no-scheme"
    );
    assert_eq!(
        parse_target("www.example.com").unwrap().as_str(),
        "http://www.example.com/"
    );
    assert_eq!(
        parse_target("127.0.0.1:8080/x?q=1").unwrap().as_str(),
        "http://127.0.0.1:8080/x?q=1"
    );
    // host:port that looks like a scheme
    assert_eq!(
        parse_target("localhost:8080/x").unwrap().as_str(),
        "http://localhost:8080/x"
    );
    assert_eq!(
        parse_target("https://example.com").unwrap().as_str(),
        "https://example.com/"
    );
}

#[test]
fn test_parse_target() {
    assert!(parse_target("http://example.com").is_ok());
    assert_eq!(
        parse_target("not a url").unwrap_err().kind,
        TransportErrorKind::InvalidUrl
    );
    assert_eq!(
        parse_target("gopher://example.com").unwrap_err().kind,
        TransportErrorKind::UnsupportedProtocol
    );
}

#[test]
fn test_connect_timeout_mismatch_is_refused() {
    let transport = ReqwestTransport::new(&TransportPolicy::default()).unwrap();
    assert_eq!(transport.connect_timeout(), Duration::from_secs(5));

    let policy = TransportPolicy {
        connect_timeout: Duration::from_secs(1),
        ..TransportPolicy::default()
    };
    // Port 9 (discard) is never contacted: the request is refused up front
    let request = build_get("http://127.0.0.1:9/", &Params::new(), &policy);
    let err = transport.execute(&request).unwrap_err();
    assert_eq!(err.kind, TransportErrorKind::Builder);
    assert!(err.description.contains("connect timeout"));
}
