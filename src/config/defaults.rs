//! Default configuration values for Window-Process

use serde::{Deserialize, Serialize};

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub query: QueryDefaults,
    pub output: OutputDefaults,
    pub logging: LoggingDefaults,
}

/// Default process query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryDefaults {
    pub name_capacity: usize,
}

/// Default report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDefaults {
    pub format: OutputFormat,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
}

/// How the diagnostic report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        query: QueryDefaults {
            name_capacity: crate::process::NAME_CAPACITY,
        },
        output: OutputDefaults {
            format: OutputFormat::Pretty,
        },
        logging: LoggingDefaults {
            level: "info".to_string(),
        },
    }
}
