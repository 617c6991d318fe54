//! Command-line flags using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Two-operand terminal calculator
#[derive(Parser, Debug)]
#[command(name = "simple-calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the configuration file)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Builds the effective configuration: flags, then file, then defaults
    pub fn resolve_config(&self) -> AppResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(file) = &self.log_file {
            config = config.with_log_file(file);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["simple-calculator"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.print_config);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "simple-calculator",
            "-c",
            "calc.yaml",
            "--log-file",
            "calc.log",
            "-vv",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("calc.yaml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("calc.log")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.print_config);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["simple-calculator", "2", "+", "3"]).is_err());
    }

    #[test]
    fn test_resolve_config_defaults() {
        let cli = Cli::try_parse_from(["simple-calculator"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_log_file_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log:\n  file: from-config.log\n  level: warn").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "simple-calculator",
            "--config",
            &path,
            "--log-file",
            "from-flag.log",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.log.file, Some(PathBuf::from("from-flag.log")));
        assert_eq!(config.log.level, "warn");
    }
}
