//! Status information: code, effective URL and zone.

use super::patterns::{first_capture, ZONE_RE};
use super::types::StatusInfo;

/// Extracts the zone (bare host) from a URL.
///
/// The scheme (`http`, `https`, `ftp`) is optional; the zone is the run of
/// letters, digits, dots and hyphens that follows it, not ending in a dot. A port
/// or path ends the zone. Returns `None` when nothing host-like starts the URL.
pub fn extract_zone(url: &str) -> Option<String> {
    first_capture(&ZONE_RE, url, "zone")
}

/// Builds the status section from the transport's final status and URL.
pub fn status_info(http_code: u16, effective_url: &str) -> StatusInfo {
    StatusInfo {
        http_code,
        url: effective_url.to_string(),
        zone: extract_zone(effective_url),
    }
}
