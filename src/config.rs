//! Configuration management for substract.
//!
//! Values are layered: built-in defaults, then environment variables, then
//! command-line arguments.

use std::path::PathBuf;

use crate::errors::{Result, SubstractError};
use crate::extract::{DEFAULT_SCHEME, ExtractOptions};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "subdomains.txt";

/// Main configuration structure for substract.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the subdomain list is written
    pub output_path: PathBuf,

    /// Scheme prepended to URLs given without one
    pub default_scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(output) = std::env::var("SUBSTRACT_OUTPUT")
            && !output.trim().is_empty()
        {
            config.output_path = PathBuf::from(output);
        }

        if let Ok(scheme) = std::env::var("SUBSTRACT_DEFAULT_SCHEME") {
            config.default_scheme = scheme.trim().to_ascii_lowercase();
        }

        config
    }

    /// Merge with CLI arguments, giving CLI precedence
    pub fn merge_with_cli(&mut self, cli: &crate::cli::Cli) {
        if let Some(ref output) = cli.output {
            self.output_path = output.clone();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(SubstractError::configuration(
                "output path must not be empty",
            ));
        }

        if !matches!(self.default_scheme.as_str(), "http" | "https") {
            return Err(SubstractError::configuration(format!(
                "invalid default scheme '{}': expected http or https",
                self.default_scheme
            )));
        }

        Ok(())
    }

    /// Extractor options derived from this configuration.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            default_scheme: self.default_scheme.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_path, PathBuf::from("subdomains.txt"));
        assert_eq!(config.default_scheme, "http");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new();
        config.default_scheme = "ftp".to_string();
        assert!(config.validate().is_err());

        config.default_scheme = "https".to_string();
        assert!(config.validate().is_ok());

        config.output_path = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(SubstractError::Configuration { .. })
        ));
    }

    #[test]
    fn test_env_loading() {
        unsafe {
            env::set_var("SUBSTRACT_OUTPUT", "from-env.txt");
            env::set_var("SUBSTRACT_DEFAULT_SCHEME", "HTTPS");
        }

        let config = Config::from_env();
        assert_eq!(config.output_path, PathBuf::from("from-env.txt"));
        assert_eq!(config.default_scheme, "https");

        // Clean up
        unsafe {
            env::remove_var("SUBSTRACT_OUTPUT");
            env::remove_var("SUBSTRACT_DEFAULT_SCHEME");
        }
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut config = Config {
            output_path: PathBuf::from("from-env.txt"),
            ..Config::default()
        };
        let cli = Cli::try_parse_from(["substract", "-o", "cli.txt", "a.example.com"]).unwrap();
        config.merge_with_cli(&cli);
        assert_eq!(config.output_path, PathBuf::from("cli.txt"));

        let cli = Cli::try_parse_from(["substract", "a.example.com"]).unwrap();
        config.merge_with_cli(&cli);
        assert_eq!(config.output_path, PathBuf::from("cli.txt"));
    }

    #[test]
    fn test_extract_options() {
        let config = Config {
            default_scheme: "https".to_string(),
            ..Config::default()
        };
        assert_eq!(config.extract_options().default_scheme, "https");
    }
}
