//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, input, validation)
//! - Attempt failure categories for the fallback controller
//! - Categorization of transport errors
//!
//! Only [`InitializationError`] and [`AvatarError`] are ever returned to a caller.
//! Everything else is logged and absorbed into "not found".

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{AttemptFailure, AvatarError, InitializationError, ValidationError};
