//! File-based tracing setup
//!
//! The terminal UI owns stdout and stderr while it runs, so log output only
//! goes to a file, and only when one is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

/// Returns the filter directive for a configured level and `-v` count
#[must_use]
pub fn level_directive(level: &str, verbose: u8) -> &str {
    match verbose {
        0 => level,
        1 => "debug",
        _ => "trace",
    }
}

/// Builds the log filter; `RUST_LOG` takes precedence when set
pub fn build_filter(config: &LogConfig, verbose: u8) -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level_directive(&config.level, verbose))
        .map_err(|e| AppError::logging(format!("invalid level {:?}: {e}", config.level)))
}

/// Installs the global subscriber if a log file is configured
///
/// Returns whether logging was enabled.
pub fn init(config: &LogConfig, verbose: u8) -> AppResult<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let filter = build_filter(config, verbose)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::logging(format!("cannot open {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive_uses_config_without_flags() {
        assert_eq!(level_directive("warn", 0), "warn");
    }

    #[test]
    fn test_level_directive_verbose_flags() {
        assert_eq!(level_directive("warn", 1), "debug");
        assert_eq!(level_directive("warn", 2), "trace");
        assert_eq!(level_directive("warn", 5), "trace");
    }

    #[test]
    fn test_init_without_file_is_noop() {
        let config = LogConfig::default();
        assert!(!init(&config, 0).unwrap());
    }

    #[test]
    fn test_init_unwritable_path_fails() {
        let config = LogConfig {
            file: Some("/nonexistent-dir/calc.log".into()),
            level: "info".into(),
        };
        let err = init(&config, 0).unwrap_err();
        assert!(matches!(err, AppError::Logging { .. }));
    }
}
