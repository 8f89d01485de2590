//! Error handling.
//!
//! This module provides:
//! - Error type definitions (transport, decode, initialization)
//! - The non-fatal `MalformedHeaderLine` diagnostic
//! - Categorization of `reqwest` failures into transport error kinds
//!
//! Errors are split by scope:
//! - **Transport**: the exchange failed, nothing was decomposed
//! - **Decode**: one response section could not be decoded, the other survives
//! - **Diagnostics**: a stray header line was skipped

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, transport_error_from_reqwest};
pub use types::{
    DecodeError, InitializationError, MalformedHeaderLine, Section, TransportError,
    TransportErrorKind,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_transport_error_codes_are_unique() {
        let mut seen = HashSet::new();
        for kind in TransportErrorKind::iter() {
            assert!(
                seen.insert(kind.code()),
                "duplicate code {} for {:?}",
                kind.code(),
                kind
            );
        }
    }

    #[test]
    fn test_transport_error_code_follows_kind() {
        let error = TransportError::new(TransportErrorKind::Timeout, "operation timed out");
        assert_eq!(error.code, 28);
        assert_eq!(error.kind, TransportErrorKind::Timeout);
        assert_eq!(
            error.to_string(),
            "transport error 28 (timeout): operation timed out"
        );
    }

    #[test]
    fn test_transport_error_kind_names() {
        assert_eq!(TransportErrorKind::TooManyRedirects.as_str(), "too_many_redirects");
        assert_eq!(TransportErrorKind::Resolve.as_str(), "resolve");
    }

    #[test]
    fn test_decode_error_display_names_section() {
        let error = DecodeError::InvalidBytes {
            section: Section::Body,
            codec: "UTF-8".to_string(),
        };
        assert_eq!(error.to_string(), "body bytes are not valid UTF-8");
        assert_eq!(error.section(), Section::Body);

        let error = DecodeError::UnknownCodec {
            section: Section::Header,
            codec: "klingon".to_string(),
        };
        assert_eq!(error.to_string(), "unknown codec 'klingon' for header section");
    }

    #[test]
    fn test_malformed_header_line_display() {
        let diagnostic = MalformedHeaderLine {
            hop: 1,
            line: "garbage".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "malformed header line in hop 1: \"garbage\""
        );
    }
}
