// Shared helpers for integration tests: payload fixtures, mock instances,
// and a discovery stub.

use std::sync::atomic::{AtomicUsize, Ordering};

use avatar_resolver::{Config, ServiceDiscovery, SrvTarget};
use wiremock::ResponseTemplate;

/// Minimal PNG header (signature + IHDR chunk start).
#[allow(dead_code)]
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

/// JPEG with SOI/JFIF marker start and EOI trailer.
#[allow(dead_code)]
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0xFF, 0xD9];

/// SHA-256 of "alice@example.com".
#[allow(dead_code)]
pub const ALICE_HASH: &str = "ff8d9819fc0e12bf0d24892e45987e249a28dce836a85cad60e28eaaa8c6d976";

/// A 200 response declaring `content_type` with `body`.
#[allow(dead_code)]
pub fn image_response(content_type: &str, body: &[u8]) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", content_type)
        .set_body_bytes(body.to_vec())
}

/// Config pointing at `default_base_url` with short timeouts.
#[allow(dead_code)]
pub fn test_config(default_base_url: &str) -> Config {
    Config {
        default_base_url: default_base_url.to_string(),
        fetch_timeout_seconds: 2,
        dns_timeout_seconds: 1,
        ..Default::default()
    }
}

/// A local URL nothing listens on.
#[allow(dead_code)]
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    port
}

/// Discovery stub answering every domain with the same record.
#[allow(dead_code)]
pub struct FixedDiscovery {
    pub answer: Option<SrvTarget>,
    pub lookups: AtomicUsize,
}

#[allow(dead_code)]
impl FixedDiscovery {
    pub fn new(answer: Option<SrvTarget>) -> Self {
        Self {
            answer,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ServiceDiscovery for FixedDiscovery {
    async fn lookup(&self, _domain: &str) -> Option<SrvTarget> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}
