//! Serialization of one response hop into the raw header block.

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};

/// Protocol label as it appears on a status line.
pub(crate) fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_09 {
        "HTTP/0.9"
    } else if version == Version::HTTP_10 {
        "HTTP/1.0"
    } else if version == Version::HTTP_2 {
        "HTTP/2"
    } else if version == Version::HTTP_3 {
        "HTTP/3"
    } else {
        "HTTP/1.1"
    }
}

/// `200 OK`, or just `599` when the code has no registered reason phrase.
pub(crate) fn status_label(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Appends `status line CRLF (name: value CRLF)* CRLF` for one hop.
///
/// `reason` is the phrase the server actually sent, when it differs from the
/// canonical one; otherwise the canonical phrase is written. The reason phrase
/// and header values are copied byte for byte; decoding happens later, with the
/// caller's codec.
pub(crate) fn append_hop(
    raw: &mut Vec<u8>,
    version: Version,
    status: StatusCode,
    reason: Option<&[u8]>,
    headers: &HeaderMap,
) {
    raw.extend_from_slice(version_label(version).as_bytes());
    raw.push(b' ');
    match reason {
        Some(reason) => {
            raw.extend_from_slice(status.as_str().as_bytes());
            raw.push(b' ');
            raw.extend_from_slice(reason);
        }
        None => raw.extend_from_slice(status_label(status).as_bytes()),
    }
    raw.extend_from_slice(b"\r\n");

    for (name, value) in headers {
        raw.extend_from_slice(name.as_str().as_bytes());
        raw.extend_from_slice(b": ");
        raw.extend_from_slice(value.as_bytes());
        raw.extend_from_slice(b"\r\n");
    }

    raw.extend_from_slice(b"\r\n");
}
