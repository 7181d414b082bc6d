//! avatar_resolver library: federated avatar lookup for email addresses
//!
//! Resolves the avatar for an email address against a federated avatar
//! service: the instance responsible for the address's domain is discovered
//! through DNS SRV records, the request is addressed by a hash of the
//! normalized address, a single fallback instance covers failures, and the
//! returned bytes must carry a genuine image signature before they are handed
//! back.
//!
//! # Example
//!
//! ```no_run
//! use avatar_resolver::{resolve_avatar, AvatarResult, Config};
//!
//! # #[tokio::main]
//! # async fn main() {
//! match resolve_avatar(&Config::default(), "alice@example.com", 80).await {
//!     AvatarResult::Found(image) => println!("{} ({} bytes)", image.file_name, image.bytes.len()),
//!     AvatarResult::NotFound => println!("no avatar"),
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod address;
pub mod config;
pub mod dns;
mod error_handling;
pub(crate) mod fetch;
pub mod initialization;
mod models;
pub mod request;
pub(crate) mod validate;

use std::time::Duration;

use log::{debug, warn};

// Re-export public API
pub use address::{normalize_address, NormalizedAddress};
pub use config::{Config, DefaultImage, LogFormat, LogLevel, Preferences};
pub use dns::{ServiceDiscovery, SrvDiscovery, SrvTarget};
pub use error_handling::{AvatarError, InitializationError};
pub use models::{AvatarImage, AvatarResult};
pub use request::{AvatarRequest, AvatarSize};

use dns::resolve_instance;
use fetch::fetch_with_fallback;
use initialization::init_client;
use validate::validate_response;

/// Resolves avatars with one HTTP client and one discovery backend.
///
/// Holds no per-call state, so a single resolver can serve concurrent calls.
#[derive(Clone)]
pub struct AvatarResolver<D = Option<SrvDiscovery>> {
    client: reqwest::Client,
    discovery: D,
    config: Config,
}

impl AvatarResolver<Option<SrvDiscovery>> {
    /// Builds a resolver whose discovery follows `config.preferences.resolver`.
    ///
    /// An unusable resolver endpoint disables discovery instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let discovery = match config.preferences.resolver.as_deref() {
            Some(endpoint) => {
                match SrvDiscovery::from_endpoint(endpoint, config.dns_timeout_seconds) {
                    Ok(discovery) => Some(discovery),
                    Err(e) => {
                        warn!("Instance discovery disabled: {e}");
                        None
                    }
                }
            }
            None => None,
        };
        Self::with_discovery(config, discovery)
    }
}

impl<D: ServiceDiscovery> AvatarResolver<D> {
    /// Builds a resolver around a custom discovery backend.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn with_discovery(config: Config, discovery: D) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self {
            client,
            discovery,
            config,
        })
    }

    /// Resolves the avatar for `email` at `size` pixels.
    ///
    /// Never fails: a malformed address, discovery or transport failures, a
    /// bad status or a payload that is not the image it claims to be all
    /// yield [`AvatarResult::NotFound`].
    pub async fn resolve(&self, email: &str, size: AvatarSize) -> AvatarResult {
        let address = match normalize_address(email) {
            Ok(address) => address,
            Err(e) => {
                debug!("{e}");
                return AvatarResult::NotFound;
            }
        };

        let instance = resolve_instance(
            address.domain(),
            &self.discovery,
            &self.config.default_base_url,
        )
        .await;
        let request = AvatarRequest::new(&address, size, &self.config.preferences.default_image);
        let fallback = self
            .config
            .preferences
            .fallback_instance
            .as_deref()
            .unwrap_or(&self.config.default_base_url);

        let Some(response) = fetch_with_fallback(
            &self.client,
            &request,
            &instance,
            fallback,
            Duration::from_secs(self.config.fetch_timeout_seconds),
        )
        .await
        else {
            return AvatarResult::NotFound;
        };

        match validate_response(response, request.address_hash(), self.config.max_avatar_bytes).await
        {
            Ok(image) => {
                debug!(
                    "Resolved avatar {} ({}, {} bytes)",
                    image.file_name,
                    image.content_type,
                    image.bytes.len()
                );
                AvatarResult::Found(image)
            }
            Err(e) => {
                debug!("Rejected avatar for {}: {e}", request.address_hash());
                AvatarResult::NotFound
            }
        }
    }
}

/// Resolves the avatar for `email` at `size` pixels using `config`.
///
/// Builds a fresh [`AvatarResolver`] for the call; reuse a resolver when
/// resolving many addresses. An out-of-range size or a resolver that cannot
/// be built yields [`AvatarResult::NotFound`].
pub async fn resolve_avatar(config: &Config, email: &str, size: u32) -> AvatarResult {
    let size = match AvatarSize::new(size) {
        Ok(size) => size,
        Err(e) => {
            warn!("{e}");
            return AvatarResult::NotFound;
        }
    };
    match AvatarResolver::new(config.clone()) {
        Ok(resolver) => resolver.resolve(email, size).await,
        Err(e) => {
            warn!("{e}");
            AvatarResult::NotFound
        }
    }
}
