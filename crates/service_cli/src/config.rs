//! CLI configuration management.
//!
//! Loads `hazard.toml` with environment variable overrides. A missing file
//! yields the defaults; a malformed one is an error.

use credit_optimiser::bootstrapping::HazardBootstrapConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Calibration section of the configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Absolute tolerance on each calibration contract's net value
    pub tolerance: f64,
    /// Newton steps per knot
    pub max_iterations: usize,
    /// Seed hazard
    pub initial_hazard: f64,
    /// Smallest accepted `|dV/dh|`
    pub derivative_floor: f64,
    /// Fail instead of flagging on a negative hazard
    pub reject_negative_hazard: bool,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        let defaults = HazardBootstrapConfig::<f64>::default();
        Self {
            tolerance: defaults.tolerance,
            max_iterations: defaults.max_iterations,
            initial_hazard: defaults.initial_hazard,
            derivative_floor: defaults.derivative_floor,
            reject_negative_hazard: defaults.reject_negative_hazard,
        }
    }
}

impl CalibrationConfig {
    /// Bootstrap configuration for the optimiser.
    pub fn to_bootstrap_config(&self) -> HazardBootstrapConfig<f64> {
        HazardBootstrapConfig::builder()
            .tolerance(self.tolerance)
            .max_iterations(self.max_iterations)
            .initial_hazard(self.initial_hazard)
            .derivative_floor(self.derivative_floor)
            .reject_negative_hazard(self.reject_negative_hazard)
            .build()
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Calibration settings
    #[serde(default)]
    pub calibration: CalibrationConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            calibration: CalibrationConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Unparseable numeric values are ignored.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(tolerance) = std::env::var("HAZARD_TOLERANCE") {
            if let Ok(value) = tolerance.parse() {
                self.calibration.tolerance = value;
            }
        }

        if let Ok(max_iterations) = std::env::var("HAZARD_MAX_ITERATIONS") {
            if let Ok(value) = max_iterations.parse() {
                self.calibration.max_iterations = value;
            }
        }

        if let Ok(initial_hazard) = std::env::var("HAZARD_INITIAL_HAZARD") {
            if let Ok(value) = initial_hazard.parse() {
                self.calibration.initial_hazard = value;
            }
        }

        if let Ok(log_level) = std::env::var("HAZARD_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(reject) = std::env::var("HAZARD_REJECT_NEGATIVE") {
            self.calibration.reject_negative_hazard = matches!(
                reject.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, LOG_LEVELS
            ));
        }

        if let Err(calibration) = self.calibration.to_bootstrap_config().validate() {
            errors.extend(calibration);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.calibration.max_iterations, 100);
        assert_eq!(config.calibration.initial_hazard, 0.01);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[calibration]\ntolerance = 1e-12\nmax_iterations = 40").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.calibration.tolerance, 1e-12);
        assert_eq!(config.calibration.max_iterations, 40);
        assert_eq!(config.calibration.initial_hazard, 0.01);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[calibration\ntolerance = ").unwrap();
        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("HAZARD_MAX_ITERATIONS", "17");
        let config = CliConfig::default().with_env_override();
        assert_eq!(config.calibration.max_iterations, 17);
        std::env::remove_var("HAZARD_MAX_ITERATIONS");
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        config.calibration.tolerance = -1.0;
        config.calibration.max_iterations = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].contains("log_level"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_bootstrap_config_mapping() {
        let mut config = CliConfig::default();
        config.calibration.reject_negative_hazard = true;
        config.calibration.derivative_floor = 1e-9;
        let bootstrap = config.calibration.to_bootstrap_config();
        assert!(bootstrap.reject_negative_hazard);
        assert_eq!(bootstrap.derivative_floor, 1e-9);
    }
}
