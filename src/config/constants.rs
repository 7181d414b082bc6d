//! Configuration constants.
//!
//! This module defines the constants used throughout the resolver, including
//! timeouts, size limits, and the protocol's well-known defaults.

/// Base URL of the public instance used when discovery is disabled or misses.
pub const DEFAULT_BASE_URL: &str = "https://seccdn.libravatar.org";

/// Placeholder directive applied when the user has not chosen one.
pub const DEFAULT_PLACEHOLDER: &str = "identicon";

/// SRV service label for instances served over TLS.
pub const SECURE_SERVICE_LABEL: &str = "_avatars-sec._tcp";

/// Port implied by an `https` URL; omitted from built base URLs.
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Port used for a resolver endpoint given without one.
pub const DNS_DEFAULT_PORT: u16 = 53;

// Network operation timeouts
/// DNS service-discovery timeout in seconds.
/// Discovery is a single attempt, so this bounds the whole lookup.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Per-attempt HTTP timeout in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 5;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Smallest avatar edge length the protocol serves, in pixels.
pub const MIN_AVATAR_SIZE: u32 = 1;
/// Largest avatar edge length the protocol serves, in pixels.
pub const MAX_AVATAR_SIZE: u32 = 512;
/// Edge length used by the CLI when `--size` is not given.
pub const DEFAULT_AVATAR_SIZE: u32 = 80;

/// Maximum avatar body size in bytes (1MB).
/// Bodies larger than this are rejected before signature validation.
pub const MAX_AVATAR_BYTES: usize = 1024 * 1024;

/// User-Agent sent with every avatar request.
pub const DEFAULT_USER_AGENT: &str = concat!("avatar_resolver/", env!("CARGO_PKG_VERSION"));
