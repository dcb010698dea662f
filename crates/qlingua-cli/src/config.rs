//! CLI configuration.
//!
//! Values are resolved with the precedence environment > YAML file > defaults.
//!
//! ```yaml
//! logging:
//!   level: info
//! output:
//!   pretty: false
//!   precision: 4
//!   threshold: 1.0e-6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Largest number of decimal places worth printing for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Top-level CLI configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when no `-v` flag is given (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Decimal places for printed probabilities.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Probabilities at or below this value are not printed.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_precision() -> usize {
    6
}

fn default_threshold() -> f64 {
    1e-9
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            precision: default_precision(),
            threshold: default_threshold(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration with the following precedence:
    /// 1. environment variables
    /// 2. the file, if one is given
    /// 3. defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.merge_env_from(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Unset variables leave the current value unchanged. A set variable
    /// that does not parse is an error.
    pub fn merge_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QLINGUA_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QLINGUA_PRETTY_JSON") {
            self.output.pretty = parse_env("QLINGUA_PRETTY_JSON", &v)?;
        }
        if let Some(v) = lookup("QLINGUA_PRECISION") {
            self.output.precision = parse_env("QLINGUA_PRECISION", &v)?;
        }
        if let Some(v) = lookup("QLINGUA_PROBABILITY_THRESHOLD") {
            self.output.threshold = parse_env("QLINGUA_PROBABILITY_THRESHOLD", &v)?;
        }
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.output.precision
            )));
        }

        if !self.output.threshold.is_finite() || self.output.threshold < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "threshold must be a non-negative number, got {}",
                self.output.threshold
            )));
        }

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ParseError(format!("{key}: cannot parse '{value}'")))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
