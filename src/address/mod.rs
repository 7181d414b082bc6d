//! Email address normalization.
//!
//! Avatar identifiers are hashes of the normalized address, so every caller
//! must normalize the same way: surrounding whitespace trimmed, the whole
//! address lowercased, and the domain taken after the first `@`.

use crate::error_handling::AvatarError;

/// A normalized email address and its domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAddress {
    address: String,
    domain_start: usize,
}

impl NormalizedAddress {
    /// The full normalized address (`alice@example.com`).
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// The domain part, everything after the first `@`.
    pub fn domain(&self) -> &str {
        &self.address[self.domain_start..]
    }
}

/// Normalizes an email address and extracts its domain.
///
/// # Errors
///
/// Returns `AvatarError::InvalidAddress` if the address contains no `@` or
/// nothing follows it. Callers treat this as "no avatar".
pub fn normalize_address(raw: &str) -> Result<NormalizedAddress, AvatarError> {
    let address = raw.trim().to_lowercase();
    let at = address
        .find('@')
        .ok_or_else(|| AvatarError::InvalidAddress(raw.to_string()))?;
    let domain_start = at + 1;
    if domain_start >= address.len() {
        return Err(AvatarError::InvalidAddress(raw.to_string()));
    }
    Ok(NormalizedAddress {
        address,
        domain_start,
    })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
