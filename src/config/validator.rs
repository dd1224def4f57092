//! Configuration validator for Window-Process
//!
//! Validates configuration values to ensure they are within acceptable ranges.

use super::loader::{Config, ConfigError, LoggingConfig, QueryConfig};

/// Longest path the Win32 wide-character APIs accept
pub const MAX_NAME_CAPACITY: usize = 32767;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_query(&config.query)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    /// Validates process query configuration
    fn validate_query(query: &QueryConfig) -> Result<(), ConfigError> {
        if query.name_capacity == 0 {
            return Err(ConfigError::Invalid(
                "Name capacity must be at least 1".to_string(),
            ));
        }

        if query.name_capacity > MAX_NAME_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "Name capacity cannot exceed {}",
                MAX_NAME_CAPACITY
            )));
        }

        Ok(())
    }

    /// Validates logging configuration
    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
