//! Result types handed back to the caller.

/// A validated avatar image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    /// The full payload, already signature-checked
    pub bytes: Vec<u8>,
    /// Canonical content type (`image/jpeg`, never the alias the server sent)
    pub content_type: &'static str,
    /// `<address hash>.<extension>`
    pub file_name: String,
}

/// Outcome of resolving an avatar.
///
/// Has no error variant. An unreachable instance, a bad status and a forged
/// payload all read as `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AvatarResult {
    /// A validated image
    Found(AvatarImage),
    /// No usable avatar
    NotFound,
}

impl AvatarResult {
    /// Returns `true` for [`AvatarResult::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, AvatarResult::Found(_))
    }

    /// Converts into the image, if any.
    pub fn into_image(self) -> Option<AvatarImage> {
        match self {
            AvatarResult::Found(image) => Some(image),
            AvatarResult::NotFound => None,
        }
    }
}
