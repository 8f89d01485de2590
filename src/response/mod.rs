//! Response decomposition.
//!
//! This module turns the raw output of a transport into a structured result:
//! - Status: final code, effective URL, and zone
//! - Headers: one entry per redirect hop, repeated headers folded into lists
//! - Body: decoded text plus title/head/body fragments
//!
//! Decomposition is a pure function of its inputs. Every call allocates its own
//! buffers, so decomposing the same bytes twice yields identical results and
//! calls may run in parallel.

mod codec;
mod headers;
mod html;
mod patterns;
mod status;
mod types;

use log::warn;

use crate::error_handling::Section;

pub use codec::decode_section;
pub use headers::split_headers;
pub use html::extract_fragments;
pub use status::{extract_zone, status_info};
pub use types::{
    Decomposition, HeaderFields, HeaderHop, HeaderValue, ParsedBody, ParsedHeaders, StatusInfo,
};

/// Decomposes one completed exchange.
///
/// # Arguments
///
/// * `http_code` - Final status code reported by the transport
/// * `effective_url` - URL of the final hop
/// * `raw_headers` - Header bytes of all hops, separated by blank lines
/// * `raw_body` - Body bytes of the final hop
/// * `codec` - Encoding label used for both sections (e.g. `utf-8`)
///
/// A section that fails to decode is returned as `Err(DecodeError)`; the other
/// section is still decomposed.
pub fn decompose(
    http_code: u16,
    effective_url: &str,
    raw_headers: &[u8],
    raw_body: &[u8],
    codec: &str,
) -> Decomposition {
    let status = status_info(http_code, effective_url);

    let header = decode_section(raw_headers, codec, Section::Header)
        .map(|text| split_headers(&text))
        .inspect_err(|e| warn!("Header section of {effective_url} not decomposed: {e}"));

    let data = decode_section(raw_body, codec, Section::Body)
        .map(|text| extract_fragments(&text))
        .inspect_err(|e| warn!("Body section of {effective_url} not decomposed: {e}"));

    Decomposition {
        status,
        header,
        data,
    }
}
