//! SRV-based instance discovery.

use std::future::Future;
use std::time::Duration;

use log::debug;
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::SECURE_SERVICE_LABEL;
use crate::error_handling::InitializationError;
use crate::initialization::init_resolver;

/// A discovery answer: the host and port serving avatars for a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvTarget {
    /// Host name from the SRV record, without the trailing dot
    pub target: String,
    /// Port from the SRV record
    pub port: u16,
}

/// Maps an email domain to the instance responsible for it.
///
/// Implementations make a single attempt and report every failure as `None`.
pub trait ServiceDiscovery {
    /// Looks up the avatar instance for `domain`.
    fn lookup(&self, domain: &str) -> impl Future<Output = Option<SrvTarget>> + Send;
}

/// `None` is discovery switched off.
impl<D: ServiceDiscovery + Sync> ServiceDiscovery for Option<D> {
    async fn lookup(&self, domain: &str) -> Option<SrvTarget> {
        match self {
            Some(discovery) => discovery.lookup(domain).await,
            None => None,
        }
    }
}

/// One SRV answer before selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SrvCandidate {
    pub priority: u16,
    pub weight: u16,
    pub target: String,
    pub port: u16,
}

/// Picks the record to use: lowest priority first, then highest weight.
///
/// A target of `.` means the domain explicitly has no such service.
pub(crate) fn select_candidate(candidates: Vec<SrvCandidate>) -> Option<SrvTarget> {
    candidates
        .into_iter()
        .map(|c| SrvCandidate {
            target: c.target.trim_end_matches('.').to_string(),
            ..c
        })
        .filter(|c| !c.target.is_empty())
        .min_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| b.weight.cmp(&a.weight))
        })
        .map(|c| SrvTarget {
            target: c.target,
            port: c.port,
        })
}

/// Discovery backed by `_avatars-sec._tcp` SRV records.
#[derive(Clone)]
pub struct SrvDiscovery {
    resolver: TokioAsyncResolver,
    timeout: Duration,
}

impl SrvDiscovery {
    /// Wraps an existing resolver.
    pub fn new(resolver: TokioAsyncResolver, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    /// Builds discovery against a single resolver endpoint (`ip` or `ip:port`).
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::DnsResolverError` for an unparsable endpoint.
    pub fn from_endpoint(endpoint: &str, timeout_secs: u64) -> Result<Self, InitializationError> {
        let resolver = init_resolver(endpoint, timeout_secs)?;
        Ok(Self::new(resolver, Duration::from_secs(timeout_secs)))
    }
}

impl ServiceDiscovery for SrvDiscovery {
    async fn lookup(&self, domain: &str) -> Option<SrvTarget> {
        // Trailing dot keeps the name fully qualified
        let name = format!("{SECURE_SERVICE_LABEL}.{domain}.");

        let lookup = match tokio::time::timeout(self.timeout, self.resolver.srv_lookup(name.as_str()))
            .await
        {
            Ok(Ok(lookup)) => lookup,
            Ok(Err(e)) => {
                debug!("SRV lookup for {name} failed: {e}");
                return None;
            }
            Err(_) => {
                debug!("SRV lookup for {name} timed out");
                return None;
            }
        };

        let candidates = lookup
            .iter()
            .map(|srv| SrvCandidate {
                priority: srv.priority(),
                weight: srv.weight(),
                target: srv.target().to_utf8(),
                port: srv.port(),
            })
            .collect();

        let selected = select_candidate(candidates);
        if selected.is_none() {
            debug!("SRV lookup for {name} returned no usable record");
        }
        selected
    }
}
