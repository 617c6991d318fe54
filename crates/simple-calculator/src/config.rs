//! Application configuration
//!
//! Loaded from an optional YAML file (or JSON when the file name ends in
//! `.json`). Every field has a default, so an empty file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Text shown on the calculator screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Title on the outer border
    pub title: String,
    /// Label of the first operand field
    pub first_label: String,
    /// Label of the second operand field
    pub second_label: String,
    /// Info lines shown below the buttons; hidden when empty
    pub footer: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: " Simple Calculator ".to_string(),
            first_label: "Number 1".to_string(),
            second_label: "Number 2".to_string(),
            footer: Vec::new(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; logging is off when unset because the terminal owns stdout
    pub file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `simple_calculator=debug`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Screen text
    pub display: DisplayConfig,
    /// Logging
    pub log: LogConfig,
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {e}", path.display())))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// Parses YAML configuration
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        // serde_yaml_ng rejects an empty document; treat it as all defaults
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Parses JSON configuration
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the configuration as YAML
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.log.file = Some(file.into());
        self
    }

    /// Set the log level directive
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log.level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.display.first_label, "Number 1");
        assert_eq!(config.display.second_label, "Number 2");
        assert!(config.display.title.contains("Simple Calculator"));
        assert!(config.display.footer.is_empty());
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = AppConfig::from_yaml(
            "display:\n  footer:\n    - \"Name: Ada\"\n    - \"ID: 42\"\nlog:\n  level: debug\n",
        )
        .unwrap();
        assert_eq!(config.display.footer, ["Name: Ada", "ID: 42"]);
        assert_eq!(config.display.first_label, "Number 1");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_from_yaml_empty_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = AppConfig::from_yaml("display: [1, 2").unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
    }

    #[test]
    fn test_from_json() {
        let config =
            AppConfig::from_json(r#"{"display": {"second_label": "Divisor"}}"#).unwrap();
        assert_eq!(config.display.second_label, "Divisor");
        assert_eq!(config.display.first_label, "Number 1");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig::new()
            .with_log_file("/tmp/calc.log")
            .with_log_level("trace");
        let yaml = config.to_yaml().unwrap();
        assert_eq!(AppConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "display:\n  title: \" Pocket \"").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.display.title, " Pocket ");
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"log": {{"level": "warn"}}}}"#).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/calc.yaml")).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains("/nonexistent/calc.yaml"));
    }
}
