//! Instance resolution tests.

use super::discovery::{select_candidate, SrvCandidate};
use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Discovery stub returning a fixed answer and counting lookups.
struct StaticDiscovery {
    answer: Option<SrvTarget>,
    lookups: AtomicUsize,
}

impl StaticDiscovery {
    fn new(answer: Option<SrvTarget>) -> Self {
        Self {
            answer,
            lookups: AtomicUsize::new(0),
        }
    }
}

impl ServiceDiscovery for StaticDiscovery {
    async fn lookup(&self, _domain: &str) -> Option<SrvTarget> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

fn candidate(priority: u16, weight: u16, target: &str, port: u16) -> SrvCandidate {
    SrvCandidate {
        priority,
        weight,
        target: target.to_string(),
        port,
    }
}

#[test]
fn test_build_secure_url_default_port() {
    assert_eq!(
        build_secure_url("avatars.example.com", 443),
        "https://avatars.example.com"
    );
}

#[test]
fn test_build_secure_url_custom_port_and_trailing_dot() {
    assert_eq!(
        build_secure_url("avatars.example.com.", 8443),
        "https://avatars.example.com:8443"
    );
}

#[test]
fn test_select_candidate_prefers_lowest_priority() {
    let selected = select_candidate(vec![
        candidate(20, 100, "backup.example.", 443),
        candidate(10, 0, "primary.example.", 443),
    ]);
    assert_eq!(
        selected,
        Some(SrvTarget {
            target: "primary.example".to_string(),
            port: 443
        })
    );
}

#[test]
fn test_select_candidate_prefers_highest_weight_within_priority() {
    let selected = select_candidate(vec![
        candidate(10, 5, "light.example.", 443),
        candidate(10, 50, "heavy.example.", 8443),
    ]);
    assert_eq!(selected.map(|t| t.target), Some("heavy.example".to_string()));
}

#[test]
fn test_select_candidate_ignores_root_target() {
    assert_eq!(select_candidate(vec![candidate(0, 0, ".", 443)]), None);
    assert_eq!(select_candidate(Vec::new()), None);
}

#[tokio::test]
async fn test_resolve_instance_uses_discovery_answer() {
    let discovery = StaticDiscovery::new(Some(SrvTarget {
        target: "avatars.example.org".to_string(),
        port: 8443,
    }));

    let instance = resolve_instance("example.org", &discovery, "https://default.example").await;

    assert_eq!(instance.base_url, "https://avatars.example.org:8443");
    assert_eq!(instance.source, InstanceSource::Discovered);
    assert_eq!(discovery.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resolve_instance_falls_back_to_default_on_miss() {
    let discovery = StaticDiscovery::new(None);

    let instance = resolve_instance("example.org", &discovery, "https://default.example/").await;

    assert_eq!(instance.base_url, "https://default.example");
    assert_eq!(instance.source, InstanceSource::Default);
    // Single attempt, no retry at the discovery stage
    assert_eq!(discovery.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resolve_instance_discovery_disabled() {
    let disabled: Option<StaticDiscovery> = None;

    let instance = resolve_instance("example.org", &disabled, "https://default.example").await;

    assert_eq!(instance.base_url, "https://default.example");
    assert_eq!(instance.source, InstanceSource::Default);
}

#[tokio::test]
async fn test_srv_discovery_unreachable_resolver_yields_none() {
    // Bind then drop a UDP socket so nothing answers on that port
    let socket = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    let endpoint = socket.local_addr().unwrap().to_string();
    drop(socket);

    let discovery = SrvDiscovery::from_endpoint(&endpoint, 1).unwrap();
    let started = std::time::Instant::now();

    assert_eq!(discovery.lookup("example.com").await, None);
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}

#[test]
fn test_instance_source_display() {
    assert_eq!(InstanceSource::Discovered.to_string(), "discovered");
    assert_eq!(InstanceSource::Default.to_string(), "default");
}
