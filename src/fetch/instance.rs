//! Instance identity.

use url::Url;

/// Reduces an instance URL to `scheme://host:port/path` with defaults filled in.
///
/// `url` already lowercases the scheme and host; the explicit port and the
/// trimmed path make `https://A.example:443/` and `https://a.example` equal.
fn instance_key(base_url: &str) -> Option<String> {
    let url = Url::parse(base_url.trim()).ok()?;
    Some(format!(
        "{}://{}:{}{}",
        url.scheme(),
        url.host_str()?,
        url.port_or_known_default()?,
        url.path().trim_end_matches('/')
    ))
}

/// Returns `true` when both URLs address the same instance.
///
/// URLs that fail to parse are compared literally.
pub fn same_instance(a: &str, b: &str) -> bool {
    match (instance_key(a), instance_key(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}
