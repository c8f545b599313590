//! Configuration handling
//!
//! Configuration is stored in `timeoff.toml` at the project root. Every key
//! is optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DEFAULT_HEADER_MARKER;

/// File name of the project configuration
pub const CONFIG_FILE: &str = "timeoff.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Project-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding raw pastes and intermediate tables
    pub data_dir: PathBuf,

    /// Generated calendar document
    pub output: PathBuf,

    /// Substring identifying the export's header row
    pub header_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output: PathBuf::from("docs").join("calendar.json"),
            header_marker: DEFAULT_HEADER_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration for a project root, falling back to defaults
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        Self::parse(&content).context("Failed to parse project config")
    }

    /// Parses and validates TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.header_marker.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "header_marker must not be empty".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output must not be empty".to_string()));
        }
        Ok(())
    }

    /// Finds the project root by looking for `timeoff.toml` in the current
    /// directory and its ancestors
    pub fn find_project_root() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            if current.join(CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Commented default file written by `timeoff init`
    pub fn default_file_contents() -> String {
        format!(
            r#"# Time-off calendar configuration

# Directory with raw_<bucket>.txt pastes and timeoff_<bucket>.csv tables
data_dir = "data"

# Generated calendar document
output = "docs/calendar.json"

# Substring that marks the column header row of a raw paste
header_marker = {}
"#,
            toml_string(DEFAULT_HEADER_MARKER)
        )
    }
}

/// Quotes a value as a TOML basic string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output, PathBuf::from("docs/calendar.json"));
        assert_eq!(config.header_marker, "Date and Time\tType\t");
    }

    #[test]
    fn parse_partial_config() {
        let config = Config::parse(r#"data_dir = "exports""#).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("exports"));
        assert_eq!(config.output, PathBuf::from("docs/calendar.json"));
    }

    #[test]
    fn parse_escaped_marker() {
        let config = Config::parse(r#"header_marker = "When\tKind\t""#).unwrap();
        assert_eq!(config.header_marker, "When\tKind\t");
    }

    #[test]
    fn empty_marker_is_invalid() {
        let err = Config::parse(r#"header_marker = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml() {
        let err = Config::parse("data_dir = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn default_file_round_trips() {
        let config = Config::parse(&Config::default_file_contents()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::for_project(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_project_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "output = \"out/cal.json\"\n").unwrap();

        let config = Config::for_project(dir.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("out/cal.json"));
    }
}
