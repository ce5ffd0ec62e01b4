//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Console filter directive.
    #[serde(default = "default_console_level")]
    pub level: String,
    /// Filter directive for the run log file.
    #[serde(default = "default_file_level")]
    pub file_level: String,
    /// Write a per-run log file under the logs directory.
    #[serde(default = "default_file_enabled")]
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_console_level(),
            file_level: default_file_level(),
            file_enabled: default_file_enabled(),
        }
    }
}

fn default_console_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

const fn default_file_enabled() -> bool {
    true
}
