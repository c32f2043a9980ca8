//! Tracing setup.
//!
//! The TUI owns stdout, so logs go to a file through a non-blocking writer.
//! The returned guard must be held until exit or buffered lines are lost.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable overriding the configured filter.
pub const LOG_ENV: &str = "YAP_LOG";

/// Builds the filter: `YAP_LOG` if set, else the configured directive.
///
/// # Errors
/// Returns an error if the chosen directive does not parse.
pub fn build_filter(env_value: Option<&str>, configured: &str) -> Result<EnvFilter> {
    let directive = env_value.unwrap_or(configured);
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter '{directive}'"))
}

/// Installs the global subscriber writing to `config.file_path()`.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let path = config.file_path();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log path has no file name: {}", path.display()))?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env_value.as_deref(), &config.level)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %path.display(),
        "logging initialized"
    );
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value_wins_over_config() {
        let filter = build_filter(Some("debug"), "info").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_config_level_used_without_env() {
        let filter = build_filter(None, "yap_core=trace").unwrap();
        assert_eq!(filter.to_string(), "yap_core=trace");
    }

    #[test]
    fn test_invalid_level_is_an_error() {
        let err = build_filter(None, "yap_core=loud").unwrap_err();
        assert!(err.to_string().contains("yap_core=loud"));
    }
}
