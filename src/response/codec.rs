//! Text decoding of raw response bytes.

use encoding_rs::Encoding;

use crate::error_handling::{DecodeError, Section};

/// Decodes `bytes` with the encoding named by `label` (WHATWG label, e.g. `utf-8`, `gbk`).
///
/// Decoding is strict: malformed input is an error, never replaced with U+FFFD.
/// A byte order mark is kept as ordinary content, like any other decoded text.
///
/// # Errors
///
/// Returns `DecodeError::UnknownCodec` if `label` names no known encoding, and
/// `DecodeError::InvalidBytes` if `bytes` are not valid in that encoding.
pub fn decode_section(bytes: &[u8], label: &str, section: Section) -> Result<String, DecodeError> {
    let encoding =
        Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| DecodeError::UnknownCodec {
            section,
            codec: label.to_string(),
        })?;

    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| DecodeError::InvalidBytes {
            section,
            codec: encoding.name().to_string(),
        })
}
