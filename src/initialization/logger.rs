//! Logger initialization.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Renders one log record as a single JSON object line (without the newline).
fn json_line(timestamp_millis: i64, level: log::Level, target: &str, message: &str) -> String {
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        timestamp_millis,
        level,
        target,
        serde_json::to_string(message).unwrap_or_else(|_| "\"\"".into())
    )
}

fn plain_prefix(level: log::Level) -> (&'static str, ColoredString) {
    let label = level.to_string();
    match level {
        log::Level::Error => ("❌", label.red()),
        log::Level::Warn => ("⚠️", label.yellow()),
        log::Level::Info => ("✔️", label.green()),
        log::Level::Debug => ("🔍", label.blue()),
        log::Level::Trace => ("🔬", label.purple()),
    }
}

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and `level` then overrides the crate's own filter,
/// so `RUST_LOG=reqwest=debug` still works next to `--log-level`. Transport
/// and DNS crates are capped to keep discovery misses from flooding output.
///
/// ```bash
/// RUST_LOG=reqwest=debug avatar_resolver alice@example.com --log-level debug
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);
    builder.filter_module("trust_dns_proto", LevelFilter::Error);
    builder.filter_module("trust_dns_resolver", LevelFilter::Warn);
    builder.filter_module("avatar_resolver", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| {
                let (emoji, colored_level) = plain_prefix(record.level());
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;

    Ok(())
}
