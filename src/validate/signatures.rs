//! Allowed image types and their binary signatures.

/// An allowed declared content type and how to recognise its payload.
#[derive(Debug, PartialEq, Eq)]
pub struct SupportedContentType {
    /// Declared `Content-Type` this entry matches (lowercase, no parameters)
    pub content_type: &'static str,
    /// Canonical type reported to the caller
    pub normalized: &'static str,
    /// File extension for the canonical type
    pub extension: &'static str,
    /// Bytes every payload starts with
    pub signature: &'static [u8],
    /// Bytes every payload ends with, where the format defines a trailer
    pub tail: Option<&'static [u8]>,
}

const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8];
const JPEG_TAIL: &[u8] = &[0xFF, 0xD9];
// "GIF8", shared by GIF87a and GIF89a
const GIF_SIGNATURE: &[u8] = &[0x47, 0x49, 0x46, 0x38];

/// Every content type accepted from an instance. Anything else is rejected.
pub static SUPPORTED_CONTENT_TYPES: &[SupportedContentType] = &[
    SupportedContentType {
        content_type: "image/png",
        normalized: "image/png",
        extension: "png",
        signature: PNG_SIGNATURE,
        tail: None,
    },
    SupportedContentType {
        content_type: "image/x-png",
        normalized: "image/png",
        extension: "png",
        signature: PNG_SIGNATURE,
        tail: None,
    },
    SupportedContentType {
        content_type: "image/jpeg",
        normalized: "image/jpeg",
        extension: "jpeg",
        signature: JPEG_SIGNATURE,
        tail: Some(JPEG_TAIL),
    },
    SupportedContentType {
        content_type: "image/jpg",
        normalized: "image/jpeg",
        extension: "jpeg",
        signature: JPEG_SIGNATURE,
        tail: Some(JPEG_TAIL),
    },
    SupportedContentType {
        content_type: "image/pjpeg",
        normalized: "image/jpeg",
        extension: "jpeg",
        signature: JPEG_SIGNATURE,
        tail: Some(JPEG_TAIL),
    },
    SupportedContentType {
        content_type: "image/gif",
        normalized: "image/gif",
        extension: "gif",
        signature: GIF_SIGNATURE,
        tail: None,
    },
];

/// Finds the table entry for a declared `Content-Type` header value.
///
/// Media-type parameters are ignored and the comparison is case-insensitive,
/// so `Image/PNG; charset=binary` matches `image/png`.
pub fn lookup_content_type(declared: &str) -> Option<&'static SupportedContentType> {
    let essence = declared.split(';').next().unwrap_or_default().trim();
    SUPPORTED_CONTENT_TYPES
        .iter()
        .find(|entry| entry.content_type.eq_ignore_ascii_case(essence))
}

/// Checks that `bytes` starts with `signature` and, if given, ends with `tail`.
///
/// The signature and tail may not overlap, so a payload must be at least as
/// long as both together.
pub fn matches_signature(bytes: &[u8], signature: &[u8], tail: Option<&[u8]>) -> bool {
    let tail = tail.unwrap_or_default();
    bytes.len() >= signature.len() + tail.len()
        && bytes.starts_with(signature)
        && bytes.ends_with(tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_unique_and_signatures_non_empty() {
        for (i, entry) in SUPPORTED_CONTENT_TYPES.iter().enumerate() {
            assert!(!entry.signature.is_empty(), "{}", entry.content_type);
            assert_eq!(entry.content_type, entry.content_type.to_ascii_lowercase());
            assert!(SUPPORTED_CONTENT_TYPES[i + 1..]
                .iter()
                .all(|other| other.content_type != entry.content_type));
        }
    }

    #[test]
    fn test_table_normalized_types_are_keys() {
        // Every alias must point at a canonical entry that exists in its own right
        for entry in SUPPORTED_CONTENT_TYPES {
            let canonical = lookup_content_type(entry.normalized).unwrap();
            assert_eq!(canonical.normalized, entry.normalized);
            assert_eq!(canonical.extension, entry.extension);
        }
    }

    #[test]
    fn test_lookup_legacy_jpg_alias() {
        let entry = lookup_content_type("image/jpg").unwrap();
        assert_eq!(entry.normalized, "image/jpeg");
        assert_eq!(entry.extension, "jpeg");
    }

    #[test]
    fn test_lookup_ignores_parameters_and_case() {
        let entry = lookup_content_type("Image/PNG; charset=binary").unwrap();
        assert_eq!(entry.normalized, "image/png");
    }

    #[test]
    fn test_lookup_rejects_unknown_types() {
        assert!(lookup_content_type("text/html").is_none());
        assert!(lookup_content_type("image/svg+xml").is_none());
        assert!(lookup_content_type("").is_none());
    }

    #[test]
    fn test_matches_signature_head_and_tail() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0xFF, 0xD9];
        assert!(matches_signature(&jpeg, JPEG_SIGNATURE, Some(JPEG_TAIL)));

        let truncated = [0xFF, 0xD8, 0xFF, 0xE0, 0x00];
        assert!(!matches_signature(&truncated, JPEG_SIGNATURE, Some(JPEG_TAIL)));
    }

    #[test]
    fn test_matches_signature_rejects_short_or_foreign_payloads() {
        assert!(!matches_signature(&[], PNG_SIGNATURE, None));
        assert!(!matches_signature(&PNG_SIGNATURE[..4], PNG_SIGNATURE, None));
        assert!(!matches_signature(b"<html></html>", PNG_SIGNATURE, None));
        // Signature and tail cannot share bytes
        assert!(!matches_signature(&[0xFF, 0xD8, 0xD9], JPEG_SIGNATURE, Some(&[0xD8u8, 0xD9][..])));
    }

    #[test]
    fn test_matches_signature_gif_variants() {
        assert!(matches_signature(b"GIF87a\x01\x00;", GIF_SIGNATURE, None));
        assert!(matches_signature(b"GIF89a\x01\x00;", GIF_SIGNATURE, None));
    }
}
