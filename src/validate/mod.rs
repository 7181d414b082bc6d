//! Response validation.
//!
//! Instances are untrusted. A response only becomes an avatar when:
//! 1. it declares a `Content-Type` from the allow-list,
//! 2. its body fits under the size cap,
//! 3. the body's leading (and, for JPEG, trailing) bytes match that type.
//!
//! The declared type is only used to pick the table entry; the caller always
//! sees the entry's canonical type.

mod body;
mod signatures;

use reqwest::header::CONTENT_TYPE;

use crate::error_handling::ValidationError;
use crate::models::AvatarImage;
use body::read_body_with_limit;

// Re-export public API
pub use signatures::{lookup_content_type, matches_signature};

/// Validates a successful response and packages it as an [`AvatarImage`].
///
/// The body is not read when the content type is missing or not allowed.
///
/// # Errors
///
/// Returns the first [`ValidationError`] gate that fails.
pub async fn validate_response(
    response: reqwest::Response,
    address_hash: &str,
    max_bytes: usize,
) -> Result<AvatarImage, ValidationError> {
    let entry = {
        let declared = response
            .headers()
            .get(CONTENT_TYPE)
            .ok_or(ValidationError::MissingContentType)?;
        let declared = String::from_utf8_lossy(declared.as_bytes());
        lookup_content_type(&declared)
            .ok_or_else(|| ValidationError::UnsupportedContentType(declared.into_owned()))?
    };

    let bytes = read_body_with_limit(response, max_bytes).await?;

    if !matches_signature(&bytes, entry.signature, None) {
        return Err(ValidationError::SignatureMismatch(entry.normalized));
    }
    if entry.tail.is_some() && !matches_signature(&bytes, entry.signature, entry.tail) {
        return Err(ValidationError::TailMismatch(entry.normalized));
    }

    Ok(AvatarImage {
        bytes,
        content_type: entry.normalized,
        file_name: format!("{address_hash}.{}", entry.extension),
    })
}
