//! Shared HTTP client for listing source requests.
//!
//! One [`reqwest::Client`] is built per scan and reused for every keyword so
//! connections to the search endpoint are pooled.

use crate::config::ScanConfig;
use crate::error::MatchError;
use std::time::Duration;

/// User-Agent sent when the configuration does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("job-match/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for listing source requests.
///
/// The client has:
/// - Per-request timeout from config
/// - The configured User-Agent, or [`DEFAULT_USER_AGENT`]
/// - gzip decompression
///
/// # Errors
///
/// Returns [`MatchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ScanConfig) -> Result<reqwest::Client, MatchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| MatchError::Http(format!("failed to build HTTP client: {e}")))
}
