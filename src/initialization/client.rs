//! HTTP client initialization.

use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Maximum redirects followed while fetching one avatar.
const MAX_REDIRECTS: usize = 5;

/// Initializes the HTTP client used for avatar fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent from the configuration
/// - Overall timeout of `fetch_timeout_seconds`, which also bounds the body read
/// - TCP connect timeout of `TCP_CONNECT_TIMEOUT_SECS`
/// - At most `MAX_REDIRECTS` redirects (instances redirect to placeholder images)
/// - Rustls TLS backend with certificate validation
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.fetch_timeout_seconds))
        .connect_timeout(Duration::from_secs(
            TCP_CONNECT_TIMEOUT_SECS.min(config.fetch_timeout_seconds),
        ))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(config.user_agent.clone())
        .build()
}
