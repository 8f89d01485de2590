//! HTML fragment extraction.
//!
//! Only the first `<title>`, `<head>` and `<body>` are located; nothing is
//! parsed into a document tree.

use log::debug;

use super::patterns::{first_capture, BODY_RE, HEAD_RE, TITLE_RE};
use super::types::ParsedBody;

/// Extracts the first title, head and body fragments from decoded body text.
///
/// Each fragment is the trimmed inner content of the first matching element,
/// or `None` when the element does not occur. Matching ignores case and spans
/// newlines.
pub fn extract_fragments(raw: &str) -> ParsedBody {
    let title = first_capture(&TITLE_RE, raw, "title");
    let head = first_capture(&HEAD_RE, raw, "head");
    let body = first_capture(&BODY_RE, raw, "body");
    debug!(
        "Extracted fragments from {} body bytes: title={:?}, head={}, body={}",
        raw.len(),
        title,
        head.is_some(),
        body.is_some()
    );

    ParsedBody {
        raw: raw.to_string(),
        title,
        head,
        body,
    }
}
