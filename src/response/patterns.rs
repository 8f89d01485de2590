//! Regex patterns used by response decomposition.
//!
//! Compiled once on first use and shared across calls.

use regex::Regex;
use std::sync::LazyLock;

// Optional scheme, then the host ("zone"), then anything. Anchored at the start only.
const ZONE_PATTERN: &str = r"(?i)^((https?|ftp)://)?(?P<zone>[a-zA-Z0-9.\-]+[a-zA-Z0-9\-])/?(.*)";

// First occurrence of each element, attributes allowed on the opening tag,
// surrounding whitespace of the inner content left outside the capture.
const TITLE_PATTERN: &str = r"(?is)<title.*?>\s*(?P<title>.*?)\s*</title>";
const HEAD_PATTERN: &str = r"(?is)<head.*?>\s*(?P<head>.*?)\s*</head>";
const BODY_PATTERN: &str = r"(?is)<body.*?>\s*(?P<body>.*?)\s*</body>";

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

pub(crate) static ZONE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ZONE_PATTERN, "ZONE_RE"));
pub(crate) static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TITLE_PATTERN, "TITLE_RE"));
pub(crate) static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HEAD_PATTERN, "HEAD_RE"));
pub(crate) static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BODY_PATTERN, "BODY_RE"));

/// Returns the named group of the first match of `re` in `text`.
pub(crate) fn first_capture(re: &Regex, text: &str, group: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.name(group))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        // Forces every LazyLock
        assert!(ZONE_RE.is_match("example.com"));
        assert!(TITLE_RE.is_match("<title>x</title>"));
        assert!(HEAD_RE.is_match("<head></head>"));
        assert!(BODY_RE.is_match("<body></body>"));
    }

    #[test]
    fn test_first_capture_missing_group() {
        assert_eq!(first_capture(&TITLE_RE, "no markup here", "title"), None);
        assert_eq!(
            first_capture(&TITLE_RE, "<title>a</title>", "nonexistent"),
            None
        );
    }
}
