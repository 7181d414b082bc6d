//! Fetch with a single fallback.

use std::time::Duration;

use log::debug;

use super::instance::same_instance;
use crate::dns::ResolvedInstance;
use crate::error_handling::{categorize_reqwest_error, AttemptFailure};
use crate::request::AvatarRequest;

/// Sends one request to `base_url`, bounded by `timeout`.
///
/// Only a success status counts as success; everything else is an
/// [`AttemptFailure`].
async fn attempt(
    client: &reqwest::Client,
    request: &AvatarRequest,
    base_url: &str,
    timeout: Duration,
) -> Result<reqwest::Response, AttemptFailure> {
    let url = request.url_for(base_url).map_err(|e| {
        debug!("Invalid instance URL {base_url}: {e}");
        AttemptFailure::Builder
    })?;

    match tokio::time::timeout(timeout, client.get(url).send()).await {
        Ok(Ok(response)) if response.status().is_success() => Ok(response),
        Ok(Ok(response)) => {
            debug!("Instance {base_url} returned {}", response.status());
            Err(AttemptFailure::Status)
        }
        Ok(Err(e)) => {
            debug!("Request to {base_url} failed: {e}");
            Err(categorize_reqwest_error(&e))
        }
        Err(_) => Err(AttemptFailure::Timeout),
    }
}

/// Fetches the avatar from `primary`, falling back to `fallback_base_url` once.
///
/// At most two requests are sent, one after the other. The fallback is
/// skipped when it names the same instance as `primary`. Returns `None` when
/// no instance produced a success status.
pub async fn fetch_with_fallback(
    client: &reqwest::Client,
    request: &AvatarRequest,
    primary: &ResolvedInstance,
    fallback_base_url: &str,
    timeout: Duration,
) -> Option<reqwest::Response> {
    let failure = match attempt(client, request, &primary.base_url, timeout).await {
        Ok(response) => return Some(response),
        Err(failure) => failure,
    };
    debug!(
        "Attempt 1 against {} instance {} failed: {failure}",
        primary.source, primary.base_url
    );

    if same_instance(&primary.base_url, fallback_base_url) {
        debug!("Fallback {fallback_base_url} is the instance already tried; giving up");
        return None;
    }

    match attempt(client, request, fallback_base_url, timeout).await {
        Ok(response) => Some(response),
        Err(failure) => {
            debug!("Attempt 2 against {fallback_base_url} failed: {failure}");
            None
        }
    }
}
