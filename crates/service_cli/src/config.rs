//! CLI settings.
//!
//! Loaded from a TOML file with environment variable overrides
//! (`STIMULI_EXPERIMENT`, `STIMULI_FORMAT`, `STIMULI_LOG_LEVEL`,
//! `STIMULI_ROUND_OFFSET`, `STIMULI_OUTPUT_DIR`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use stimulus_core::types::ConfigError;

use crate::error::CliError;

/// Default settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "config/stimuli.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output format for generated frames.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One CSV row per column per frame
    Csv,
    /// Box-drawing text table
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// `stimuli` settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StimuliSettings {
    /// Experiment file; the shipped variant is used when absent
    pub experiment: Option<PathBuf>,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// App round that shows the first decision frame
    #[serde(default = "default_round_offset")]
    pub round_offset: usize,

    /// Directory for files written by `--output`
    pub output_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_round_offset() -> usize {
    3
}

impl Default for StimuliSettings {
    fn default() -> Self {
        Self {
            experiment: None,
            format: OutputFormat::default(),
            log_level: default_log_level(),
            round_offset: default_round_offset(),
            output_dir: None,
        }
    }
}

impl StimuliSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(experiment) = lookup("STIMULI_EXPERIMENT") {
            self.experiment = Some(PathBuf::from(experiment));
        }

        if let Some(format) = lookup("STIMULI_FORMAT") {
            self.format = format.parse().unwrap_or(self.format);
        }

        if let Some(log_level) = lookup("STIMULI_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(offset) = lookup("STIMULI_ROUND_OFFSET") {
            self.round_offset = offset.parse().unwrap_or(self.round_offset);
        }

        if let Some(output_dir) = lookup("STIMULI_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(output_dir));
        }

        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Some(experiment) = &self.experiment {
            if !experiment.exists() {
                errors.push(format!(
                    "Experiment file '{}' does not exist",
                    experiment.display()
                ));
            }
        }

        if let Some(output_dir) = &self.output_dir {
            if output_dir.exists() && !output_dir.is_dir() {
                errors.push(format!(
                    "output_dir '{}' is not a directory",
                    output_dir.display()
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Resolve an output file name against `output_dir`
    pub fn output_path(&self, file: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if file.is_relative() => dir.join(file),
            _ => file.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = StimuliSettings::default();
        assert_eq!(settings.format, OutputFormat::Table);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.round_offset, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_with_defaults() {
        let settings = StimuliSettings::from_toml_str("format = \"csv\"\n").unwrap();
        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.round_offset, 3);
        assert!(settings.experiment.is_none());
    }

    #[test]
    fn test_parse_error() {
        let result = StimuliSettings::from_toml_str("format = \"xml\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides() {
        let settings = StimuliSettings::default().with_overrides(|key| match key {
            "STIMULI_FORMAT" => Some("json".to_string()),
            "STIMULI_ROUND_OFFSET" => Some("5".to_string()),
            "STIMULI_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.round_offset, 5);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_unparseable_override_is_ignored() {
        let settings = StimuliSettings::default().with_overrides(|key| match key {
            "STIMULI_FORMAT" => Some("xml".to_string()),
            "STIMULI_ROUND_OFFSET" => Some("three".to_string()),
            _ => None,
        });
        assert_eq!(settings.format, OutputFormat::Table);
        assert_eq!(settings.round_offset, 3);
    }

    #[test]
    fn test_validate_accumulates_errors() {
        let settings = StimuliSettings {
            log_level: "loud".to_string(),
            experiment: Some(PathBuf::from("/nonexistent/experiment.toml")),
            ..StimuliSettings::default()
        };
        match settings.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_output_path() {
        let settings = StimuliSettings {
            output_dir: Some(PathBuf::from("out")),
            ..StimuliSettings::default()
        };
        assert_eq!(
            settings.output_path(Path::new("p1.csv")),
            PathBuf::from("out/p1.csv")
        );
        assert_eq!(
            settings.output_path(Path::new("/tmp/p1.csv")),
            PathBuf::from("/tmp/p1.csv")
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Supported: json, csv, table"));
    }
}
