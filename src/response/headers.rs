//! Splitting of a raw header block into per-hop header maps.

use log::{debug, warn};

use crate::error_handling::MalformedHeaderLine;

use super::types::{HeaderFields, HeaderHop, ParsedHeaders};

/// Splits decoded header text into hops.
///
/// Lines are separated by the literal `\r\n`. An empty line ends the current hop;
/// the next non-empty line opens a new one as its status line. Inside a hop every
/// line is `name:value`, where `value` loses exactly its first character (the
/// conventional space after the colon), not all leading whitespace.
///
/// Consecutive empty lines never produce empty hops, so `hops` is contiguous and
/// `parts == hops.len()`. Lines without a colon are skipped and reported in
/// `malformed`.
pub fn split_headers(raw: &str) -> ParsedHeaders {
    let mut hops: Vec<HeaderHop> = Vec::new();
    let mut malformed = Vec::new();
    let mut hop_open = false;

    for line in raw.split("\r\n") {
        if line.is_empty() {
            hop_open = false;
            continue;
        }

        let hop_count = hops.len();
        match hops.last_mut() {
            Some(hop) if hop_open => match line.split_once(':') {
                Some((name, value)) => {
                    hop.headers.append(name, strip_first_char(value).to_string())
                }
                None => {
                    let diagnostic = MalformedHeaderLine {
                        hop: hop_count - 1,
                        line: line.to_string(),
                    };
                    warn!("Skipping {diagnostic}");
                    malformed.push(diagnostic);
                }
            },
            _ => {
                hops.push(parse_status_line(line, hop_count));
                hop_open = true;
            }
        }
    }

    debug!(
        "Split {} header bytes into {} hop(s), {} malformed line(s)",
        raw.len(),
        hops.len(),
        malformed.len()
    );

    ParsedHeaders {
        raw: raw.to_string(),
        parts: hops.len(),
        hops,
        malformed,
    }
}

/// Splits `HTTP/1.1 200 OK` on its first space into protocol and status code.
fn parse_status_line(line: &str, index: usize) -> HeaderHop {
    let (protocol, status_code) = match line.split_once(' ') {
        Some((protocol, status_code)) => (protocol, status_code),
        None => {
            warn!("Status line of hop {index} has no status code: {line:?}");
            (line, "")
        }
    };

    HeaderHop {
        protocol: protocol.to_string(),
        status_code: status_code.to_string(),
        headers: HeaderFields::new(),
    }
}

fn strip_first_char(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next();
    chars.as_str()
}
