//! Error type definitions.
//!
//! This module defines the error and failure types used throughout the resolver.
//! None of them reach the caller of [`crate::resolve_avatar`]: attempt failures
//! and validation errors are logged and collapse to "not found".

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors for caller-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    /// Requested size is outside the range the protocol serves.
    #[error("Avatar size {0} is outside the supported range 1-512")]
    InvalidSize(u32),

    /// The address has no `@` or nothing after it.
    #[error("Email address '{0}' has no domain")]
    InvalidAddress(String),
}

/// Reasons a successful HTTP response is rejected by the validator.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The response carries no `Content-Type` header.
    #[error("Response has no Content-Type header")]
    MissingContentType,

    /// The declared content type is not an allowed image type.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The body grew past the configured cap.
    #[error("Body exceeds {limit} bytes")]
    BodyTooLarge {
        /// Configured cap in bytes
        limit: usize,
    },

    /// Reading the body failed midway.
    #[error("Failed to read body: {0}")]
    BodyReadError(#[from] ReqwestError),

    /// The leading bytes do not match the declared type.
    #[error("Body does not start with the {0} signature")]
    SignatureMismatch(&'static str),

    /// The trailing bytes do not match the declared type.
    #[error("Body does not end with the {0} trailer")]
    TailMismatch(&'static str),
}

/// Categories of a failed fetch attempt.
///
/// A failed attempt is never an error for the caller; it only decides whether
/// the fallback instance is tried and what gets logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptFailure {
    /// The attempt ran past the per-attempt timeout
    Timeout,
    /// TCP connect or TLS handshake failed
    Connect,
    /// The instance URL could not be turned into a request
    Builder,
    /// Too many redirects or a redirect loop
    Redirect,
    /// The request failed after connecting
    Request,
    /// The instance answered with a non-success status
    Status,
    /// Anything reqwest does not classify
    Other,
}

impl std::fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AttemptFailure {
    /// Returns a human-readable string representation of the failure.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptFailure::Timeout => "timeout",
            AttemptFailure::Connect => "connect error",
            AttemptFailure::Builder => "request builder error",
            AttemptFailure::Redirect => "redirect error",
            AttemptFailure::Request => "request error",
            AttemptFailure::Status => "non-success status",
            AttemptFailure::Other => "other error",
        }
    }
}
