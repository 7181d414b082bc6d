//! Resolver configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, protocol defaults)
//! - User preference and library configuration types
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, DefaultImage, LogFormat, LogLevel, Opt, Preferences};
