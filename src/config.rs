//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::error::{EsbError, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for rolling log files; empty logs to stderr only
    #[serde(default)]
    pub log_dir: String,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

/// CLI output configuration
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: String,
}

// Default value functions
fn default_log_level() -> String { "info".to_string() }
fn default_file_prefix() -> String { "esb-utils.log".to_string() }
fn default_output_format() -> String { "text".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: String::new(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

impl OutputConfig {
    /// Whether results should be printed as JSON
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use esb_utils::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is outside its allowed set
    pub fn validate(&self) -> Result<()> {
        if !["trace", "debug", "info", "warn", "error"].contains(&self.logging.level.as_str()) {
            return Err(EsbError::Config(
                toml::de::Error::custom("logging level must be one of: trace, debug, info, warn, error")
            ));
        }

        if !self.logging.log_dir.is_empty() && self.logging.file_prefix.is_empty() {
            return Err(EsbError::Config(
                toml::de::Error::custom("file_prefix cannot be empty when log_dir is set")
            ));
        }

        if !["text", "json"].contains(&self.output.format.as_str()) {
            return Err(EsbError::Config(
                toml::de::Error::custom("output format must be 'text' or 'json'")
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.logging.level, "info");
        assert!(config.logging.log_dir.is_empty());
        assert_eq!(config.output.format, "text");
        assert!(!config.output.is_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_file = write_config(r#"
[logging]
level = "debug"
log_dir = "./logs"

[output]
format = "json"
"#);

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.log_dir, "./logs");
        assert_eq!(config.logging.file_prefix, "esb-utils.log");
        assert!(config.output.is_json());
    }

    #[test]
    fn test_shipped_default_config() {
        let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(!config.output.is_json());
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let temp_file = write_config("");

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();

        assert!(matches!(config.validate(), Err(EsbError::Config(_))));
    }

    #[test]
    fn test_invalid_output_format() {
        let temp_file = write_config(r#"
[output]
format = "xml"
"#);

        assert!(matches!(Config::load(temp_file.path()), Err(EsbError::Config(_))));
    }

    #[test]
    fn test_empty_prefix_with_log_dir() {
        let mut config = Config::default();
        config.logging.log_dir = "./logs".to_string();
        config.logging.file_prefix = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let temp_file = write_config("[logging\nlevel = ");

        assert!(matches!(Config::load(temp_file.path()), Err(EsbError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load("/nonexistent/esb-utils.toml");
        assert!(matches!(result, Err(EsbError::Io(_))));
    }
}
