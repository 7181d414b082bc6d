//! Avatar request construction.
//!
//! A request is addressed by the SHA-256 of the normalized email address, so
//! every instance serving the same address agrees on the same identifier.

use sha2::{Digest, Sha256};
use url::Url;

use crate::address::NormalizedAddress;
use crate::config::{DefaultImage, DEFAULT_PLACEHOLDER, MAX_AVATAR_SIZE, MIN_AVATAR_SIZE};
use crate::error_handling::AvatarError;

/// Requested avatar edge length in pixels, within `1..=512`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarSize(u32);

impl AvatarSize {
    /// Validates a pixel size.
    ///
    /// # Errors
    ///
    /// Returns `AvatarError::InvalidSize` for 0 or anything above 512.
    pub fn new(pixels: u32) -> Result<Self, AvatarError> {
        if (MIN_AVATAR_SIZE..=MAX_AVATAR_SIZE).contains(&pixels) {
            Ok(Self(pixels))
        } else {
            Err(AvatarError::InvalidSize(pixels))
        }
    }

    /// The size in pixels.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for AvatarSize {
    type Error = AvatarError;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        Self::new(pixels)
    }
}

/// Hashes a normalized address into its lowercase hex identifier.
pub fn hash_address(normalized: &str) -> String {
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

/// An immutable, instance-independent avatar request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRequest {
    address_hash: String,
    size: AvatarSize,
    default_directive: Option<String>,
}

impl AvatarRequest {
    /// Builds the request for `address` at `size` under the user's placeholder preference.
    pub fn new(address: &NormalizedAddress, size: AvatarSize, default_image: &DefaultImage) -> Self {
        Self {
            address_hash: hash_address(address.as_str()),
            size,
            default_directive: default_image
                .directive(DEFAULT_PLACEHOLDER)
                .map(str::to_string),
        }
    }

    /// The content-addressed identifier.
    pub fn address_hash(&self) -> &str {
        &self.address_hash
    }

    /// The requested size.
    pub fn size(&self) -> AvatarSize {
        self.size
    }

    /// The `d=` directive, if one is sent.
    pub fn default_directive(&self) -> Option<&str> {
        self.default_directive.as_deref()
    }

    /// Builds the full request URL against an instance base URL.
    ///
    /// # Errors
    ///
    /// Returns a `url::ParseError` if `base_url` is not an absolute URL.
    pub fn url_for(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!(
            "{}/avatar/{}",
            base_url.trim_end_matches('/'),
            self.address_hash
        ))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("s", &self.size.get().to_string());
            if let Some(directive) = &self.default_directive {
                query.append_pair("d", directive);
            }
        }
        Ok(url)
    }
}
