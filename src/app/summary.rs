//! Human-readable rendering of a decomposition.

use std::fmt::Write;

use colored::*;

use crate::error_handling::TransportError;
use crate::response::{Decomposition, HeaderValue};

/// Renders the status, every hop and the extracted title as plain text.
///
/// Section decode failures are shown in place of the section instead of aborting
/// the summary.
pub fn format_summary(result: &Decomposition) -> String {
    let mut out = String::new();
    let status = &result.status;

    let _ = writeln!(
        out,
        "{} {} ({})",
        status_code_label(status.http_code),
        status.url,
        status.zone.as_deref().unwrap_or("-")
    );

    match &result.header {
        Ok(headers) => {
            let _ = writeln!(out, "{} hop(s)", headers.parts);
            for (index, hop) in headers.hops.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  [{index}] {} {}",
                    hop.protocol,
                    hop.status_code.bold()
                );
                for (name, value) in hop.headers.iter() {
                    let _ = writeln!(out, "      {}: {}", name.cyan(), render_value(value));
                }
            }
            for malformed in &headers.malformed {
                let _ = writeln!(out, "  {} {}", "skipped".yellow(), malformed);
            }
        }
        Err(e) => {
            let _ = writeln!(out, "{} {}", "header:".red(), e);
        }
    }

    match &result.data {
        Ok(data) => {
            let _ = writeln!(out, "title: {}", data.title.as_deref().unwrap_or("-"));
            let _ = writeln!(out, "body: {} bytes", data.raw.len());
        }
        Err(e) => {
            let _ = writeln!(out, "{} {}", "body:".red(), e);
        }
    }

    out
}

/// One-line description of a failed exchange.
pub fn format_transport_error(error: &TransportError) -> String {
    format!(
        "{} {} ({}): {}",
        "error".red().bold(),
        error.code,
        error.kind.as_str(),
        error.description
    )
}

fn status_code_label(code: u16) -> ColoredString {
    let label = code.to_string();
    match code {
        200..=299 => label.green(),
        300..=399 => label.yellow(),
        _ => label.red(),
    }
}

fn render_value(value: &HeaderValue) -> String {
    match value {
        HeaderValue::Single(value) => value.clone(),
        HeaderValue::Multiple(values) => format!("[{}]", values.join(", ")),
    }
}
