//! Configuration module for Window-Process
//!
//! Provides configuration loading, validation, and default settings
//! for the diagnostic binary.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults, OutputFormat};
pub use loader::{load_config, ConfigLoader, CONFIG_ENV, DEFAULT_CONFIG_FILE};
pub use validator::{validate_config, ConfigValidator, MAX_NAME_CAPACITY};

// Re-export the main configuration structures
pub use loader::{Config, LoggingConfig, OutputConfig, QueryConfig};

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
