//! Fetch-with-fallback controller.
//!
//! Obtains a success response from some instance, tolerating exactly one
//! failure: the resolved instance first, then the fallback instance, never
//! the same instance twice.

mod fallback;
mod instance;

// Re-export public API
pub use fallback::fetch_with_fallback;
