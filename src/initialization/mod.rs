//! Resource initialization.
//!
//! This module provides functions to initialize the shared resources of a
//! resolver:
//! - Logger (plain or JSON)
//! - HTTP client (timeouts, redirect policy, TLS)
//! - DNS resolver pointed at the user's discovery endpoint

mod client;
mod logger;
mod resolver;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::{init_resolver, parse_resolver_endpoint};
