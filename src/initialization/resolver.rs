//! DNS resolver initialization.
//!
//! Discovery only runs against a resolver endpoint the user configured, so the
//! resolver is built from that single name server rather than system config.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::DNS_DEFAULT_PORT;
use crate::error_handling::InitializationError;

/// Parses a resolver endpoint given as `ip` or `ip:port`.
///
/// IPv6 endpoints with a port use the bracketed form (`[2606:4700::1111]:53`).
pub fn parse_resolver_endpoint(endpoint: &str) -> Option<SocketAddr> {
    let endpoint = endpoint.trim();
    if let Ok(addr) = endpoint.parse::<SocketAddr>() {
        return Some(addr);
    }
    endpoint
        .parse::<IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, DNS_DEFAULT_PORT))
}

/// Initializes a DNS resolver that queries only `endpoint`.
///
/// The resolver makes a single attempt bounded by `timeout_secs`; discovery
/// failures fall through to the default instance, so retrying here would only
/// delay the fetch.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the endpoint is not an
/// `ip` or `ip:port`.
pub fn init_resolver(
    endpoint: &str,
    timeout_secs: u64,
) -> Result<TokioAsyncResolver, InitializationError> {
    let addr = parse_resolver_endpoint(endpoint).ok_or_else(|| {
        InitializationError::DnsResolverError(format!("invalid resolver endpoint '{endpoint}'"))
    })?;

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = 1;
    // Service names are always fully qualified; never append search domains
    opts.ndots = 0;

    let name_servers = NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true);
    let config = ResolverConfig::from_parts(None, vec![], name_servers);

    Ok(TokioAsyncResolver::tokio(config, opts))
}
