//! Configuration types and CLI options.
//!
//! This module defines the user preferences consumed by the resolver, the
//! library configuration, and the command-line options of the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use strum_macros::{Display, EnumString};
use structopt::StructOpt;

use crate::config::constants::{
    DEFAULT_AVATAR_SIZE, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS,
    FETCH_TIMEOUT_SECS, MAX_AVATAR_BYTES,
};
use crate::error_handling::AvatarError;
use crate::request::AvatarSize;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// The user's default-placeholder preference.
///
/// An unset preference applies the system placeholder. An explicitly empty
/// one sends no `d=` directive at all. Any other value is sent verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum DefaultImage {
    /// No preference stored
    #[default]
    Unset,
    /// Preference stored as the empty string
    ExplicitEmpty,
    /// Preference stored with a value
    Explicit(String),
}

impl DefaultImage {
    /// Returns the `d=` directive to send, given the system placeholder.
    pub fn directive<'a>(&'a self, system_default: &'a str) -> Option<&'a str> {
        match self {
            DefaultImage::Unset => Some(system_default),
            DefaultImage::ExplicitEmpty => None,
            DefaultImage::Explicit(value) => Some(value),
        }
    }
}

impl From<Option<String>> for DefaultImage {
    fn from(value: Option<String>) -> Self {
        match value {
            None => DefaultImage::Unset,
            Some(v) if v.is_empty() => DefaultImage::ExplicitEmpty,
            Some(v) => DefaultImage::Explicit(v),
        }
    }
}

/// Persisted user preferences, read-only from the resolver's point of view.
///
/// Can be loaded from a JSON file:
///
/// ```json
/// { "resolver": "9.9.9.9", "default_image": "", "fallback_instance": "https://avatars.example" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    /// DNS resolver endpoint (`ip` or `ip:port`). `None` disables discovery.
    pub resolver: Option<String>,

    /// Default placeholder directive
    pub default_image: DefaultImage,

    /// Instance tried after the first attempt fails. `None` means the default base URL.
    pub fallback_instance: Option<String>,
}

impl Preferences {
    /// Loads preferences from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid preference JSON.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse preferences in {}", path.display()))
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use avatar_resolver::{Config, Preferences};
///
/// let config = Config {
///     preferences: Preferences {
///         resolver: Some("1.1.1.1".to_string()),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Instance used when discovery is disabled or finds nothing
    pub default_base_url: String,

    /// User preferences
    pub preferences: Preferences,

    /// Per-attempt HTTP timeout in seconds
    pub fetch_timeout_seconds: u64,

    /// DNS discovery timeout in seconds
    pub dns_timeout_seconds: u64,

    /// Largest accepted avatar body in bytes
    pub max_avatar_bytes: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_base_url: DEFAULT_BASE_URL.to_string(),
            preferences: Preferences::default(),
            fetch_timeout_seconds: FETCH_TIMEOUT_SECS,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            max_avatar_bytes: MAX_AVATAR_BYTES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Command-line options for the `avatar_resolver` binary.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "avatar_resolver",
    about = "Resolve and download the federated avatar for an email address"
)]
pub struct Opt {
    /// Email address to resolve
    pub email: String,

    /// Avatar edge length in pixels (1-512, default 80)
    #[structopt(short, long)]
    pub size: Option<u32>,

    /// DNS resolver endpoint for instance discovery (ip or ip:port)
    #[structopt(long)]
    pub resolver: Option<String>,

    /// Placeholder directive sent when the address has no avatar
    #[structopt(long)]
    pub default_image: Option<String>,

    /// Send no placeholder directive at all (wins over `--default-image`)
    #[structopt(long)]
    pub no_default_image: bool,

    /// Instance tried when the first attempt fails
    #[structopt(long)]
    pub fallback: Option<String>,

    /// Instance used when discovery is disabled or finds nothing
    #[structopt(long, default_value = DEFAULT_BASE_URL)]
    pub default_base_url: String,

    /// JSON preference file; CLI flags take precedence over its values
    #[structopt(long, parse(from_os_str))]
    pub preferences: Option<PathBuf>,

    /// Directory the avatar is written to
    #[structopt(short, long, default_value = ".", parse(from_os_str))]
    pub output: PathBuf,

    /// Log level: error, warn, info, debug, trace
    #[structopt(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[structopt(long, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Opt {
    /// The requested avatar size, `DEFAULT_AVATAR_SIZE` when `--size` is absent.
    ///
    /// # Errors
    ///
    /// Returns `AvatarError::InvalidSize` if the size is outside 1-512.
    pub fn avatar_size(&self) -> Result<AvatarSize, AvatarError> {
        AvatarSize::new(self.size.unwrap_or(DEFAULT_AVATAR_SIZE))
    }

    /// Builds the library configuration, layering CLI flags over the preference file.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file cannot be loaded.
    pub fn to_config(&self) -> Result<Config> {
        let mut preferences = match &self.preferences {
            Some(path) => Preferences::from_json_file(path)?,
            None => Preferences::default(),
        };

        if self.resolver.is_some() {
            preferences.resolver = self.resolver.clone();
        }
        if self.fallback.is_some() {
            preferences.fallback_instance = self.fallback.clone();
        }
        if self.no_default_image {
            preferences.default_image = DefaultImage::ExplicitEmpty;
        } else if self.default_image.is_some() {
            preferences.default_image = DefaultImage::from(self.default_image.clone());
        }

        Ok(Config {
            default_base_url: self.default_base_url.clone(),
            preferences,
            ..Default::default()
        })
    }
}

impl Default for Opt {
    fn default() -> Self {
        Self {
            email: String::new(),
            size: None,
            resolver: None,
            default_image: None,
            no_default_image: false,
            fallback: None,
            default_base_url: DEFAULT_BASE_URL.to_string(),
            preferences: None,
            output: PathBuf::from("."),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
