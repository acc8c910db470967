//! Configuration management for MiniSocial
//!
//! Environment-based configuration with defaults and validation. Variables
//! follow the pattern `MINISOCIAL_<SECTION>_<KEY>`.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

mod error;

pub use error::ConfigError;

use crate::logging::LogLevel;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store configuration
    pub store: StoreConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Data directory for the persisted blobs
    pub data_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Example: `MINISOCIAL_STORE_DATA_DIR=/var/lib/minisocial`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(data_dir) = env::var("MINISOCIAL_STORE_DATA_DIR") {
            config.store.data_dir = PathBuf::from(data_dir);
        }
        if let Ok(level) = env::var("MINISOCIAL_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(json) = env::var("MINISOCIAL_LOG_JSON") {
            config.logging.json_format = json
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid JSON flag: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "store.data_dir must not be empty".to_string(),
            ));
        }
        if LogLevel::from_str(&self.logging.level).is_none() {
            return Err(ConfigError::ValidationFailed(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.data_dir, PathBuf::from("./data"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_data_dir() {
        let mut config = Config::default();
        config.store.data_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
