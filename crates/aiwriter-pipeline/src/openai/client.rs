//! HTTP client construction

use reqwest::blocking::Client;
use std::time::Duration;

/// Client-wide ceiling; requests set their own, shorter timeouts
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const USER_AGENT: &str = concat!("aiwriter/", env!("CARGO_PKG_VERSION"));

/// Builds the blocking client used by [`super::ReqwestTransport`]
///
/// # Errors
///
/// Returns error if the TLS backend cannot be initialised
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}
