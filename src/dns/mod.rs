//! Instance resolution.
//!
//! Finds the instance authoritative for an email domain:
//! - Service discovery through `_avatars-sec._tcp` SRV records
//! - Secure base URL construction from a discovery answer
//! - Fallback to the configured default instance on any miss
//!
//! Resolution never fails; a broken resolver only means the default instance.

mod discovery;

use log::debug;
use strum_macros::Display;

use crate::config::HTTPS_DEFAULT_PORT;

// Re-export public API
pub use discovery::{ServiceDiscovery, SrvDiscovery, SrvTarget};

/// Where a resolved instance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InstanceSource {
    /// Derived from a discovery answer
    Discovered,
    /// The configured default instance
    Default,
}

/// The instance a request is sent to first. Recomputed for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstance {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// How the instance was chosen
    pub source: InstanceSource,
}

/// Builds an `https` base URL from a discovery answer.
///
/// Port 443 is left implicit so the URL matches how instances are usually
/// spelled in configuration.
pub fn build_secure_url(target: &str, port: u16) -> String {
    let host = target.trim_end_matches('.');
    if port == HTTPS_DEFAULT_PORT {
        format!("https://{host}")
    } else {
        format!("https://{host}:{port}")
    }
}

/// Resolves the instance to try first for `domain`.
pub async fn resolve_instance<D: ServiceDiscovery>(
    domain: &str,
    discovery: &D,
    default_base_url: &str,
) -> ResolvedInstance {
    match discovery.lookup(domain).await {
        Some(SrvTarget { target, port }) => {
            let base_url = build_secure_url(&target, port);
            debug!("Discovered instance {base_url} for {domain}");
            ResolvedInstance {
                base_url,
                source: InstanceSource::Discovered,
            }
        }
        None => ResolvedInstance {
            base_url: default_base_url.trim_end_matches('/').to_string(),
            source: InstanceSource::Default,
        },
    }
}

#[cfg(test)]
mod tests;
