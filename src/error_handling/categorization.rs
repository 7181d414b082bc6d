//! Attempt failure categorization.
//!
//! Maps transport errors from `reqwest` onto [`AttemptFailure`] so the fallback
//! controller can log why an instance was abandoned.

use super::types::AttemptFailure;

/// Categorizes a `reqwest::Error` into an `AttemptFailure`.
///
/// TLS validation failures surface from reqwest as connect errors and land in
/// [`AttemptFailure::Connect`].
pub fn categorize_reqwest_error(error: &reqwest::Error) -> AttemptFailure {
    if error.is_timeout() {
        AttemptFailure::Timeout
    } else if error.is_builder() {
        AttemptFailure::Builder
    } else if error.is_redirect() {
        AttemptFailure::Redirect
    } else if error.is_status() {
        AttemptFailure::Status
    } else if error.is_connect() {
        AttemptFailure::Connect
    } else if error.is_request() {
        AttemptFailure::Request
    } else {
        AttemptFailure::Other
    }
}
