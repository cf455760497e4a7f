//! `env_logger` setup driven by `[log]` settings.

use env_logger::{Builder, Target, WriteStyle};
use log::SetLoggerError;

use crate::config::LogSettings;

/// Combine the configured filter with `RUST_LOG`.
///
/// Directives parsed later win, so `RUST_LOG` is appended after the
/// configured level.
pub fn filter_spec(settings: &LogSettings, rust_log: Option<&str>) -> String {
    let configured = settings.level.trim();
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(env) if configured.is_empty() => env.to_string(),
        Some(env) => format!("{configured},{env}"),
        None => configured.to_string(),
    }
}

/// Install the global logger writing to stderr.
///
/// Fails only if a logger is already installed.
pub fn init(settings: &LogSettings) -> Result<(), SetLoggerError> {
    let rust_log = std::env::var("RUST_LOG").ok();

    let mut builder = Builder::new();
    builder.parse_filters(&filter_spec(settings, rust_log.as_deref()));
    if !settings.timestamps {
        builder.format_timestamp(None);
    }
    builder.write_style(WriteStyle::Auto);
    builder.target(Target::Stderr);

    builder.try_init()
}
