//! HTTP client initialization.

use crate::error_handling::InitializationError;
use crate::request::TransportPolicy;

/// Initializes the blocking HTTP client used by `ReqwestTransport`.
///
/// Creates a `reqwest::blocking::Client` configured with:
/// - Connect timeout and total timeout from the policy
/// - User-Agent header from the policy
/// - Automatic redirects disabled (the transport follows them to record each hop)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    policy: &TransportPolicy,
) -> Result<reqwest::blocking::Client, InitializationError> {
    let client = reqwest::blocking::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(policy.connect_timeout)
        .timeout(policy.timeout)
        .user_agent(policy.user_agent.clone())
        .build()?;
    Ok(client)
}
