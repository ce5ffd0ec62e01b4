//! Configuration module for the UI harness.
//!
//! One [`Config`] struct, produced either by layered resolution
//! (environment defaults, then variable overrides) or from a YAML file with
//! environment variable interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ui_harness::config::{resolve_from_env, validate_config};
//!
//! // TEST_ENV=staging AQX_USERNAME=... AQX_PASSWORD=...
//! let config = resolve_from_env()?;
//! validate_config(&config)?;
//! config.artifacts.create_directories()?;
//! ```

mod artifacts;
mod browser;
mod credentials;
mod environment;
mod logging;
mod resolve;
mod timeouts;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use artifacts::ArtifactsConfig;
pub use browser::{BrowserConfig, BrowserKind};
pub use credentials::Credentials;
pub use environment::Environment;
pub use logging::LoggingConfig;
pub use resolve::{TEST_ENV_VAR, resolve_config, resolve_from_env};
pub use timeouts::{RetryConfig, TimeoutsConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),

    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A variable held a value that could not be used.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Variable name.
        name: String,
        /// Rejected value.
        value: String,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Environment under test.
    #[serde(default)]
    pub environment: Environment,
    /// Platform entry URL.
    pub base_url: String,
    /// Login credentials.
    #[serde(default)]
    pub credentials: Credentials,
    /// Browser launch settings.
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Timeouts.
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
    /// Retry settings.
    #[serde(default)]
    pub retry: RetryConfig,
    /// Artifact locations.
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Built-in defaults for an environment.
    #[must_use]
    pub fn defaults_for(environment: Environment) -> Self {
        Self {
            environment,
            base_url: environment.default_base_url().to_string(),
            credentials: Credentials::default(),
            browser: BrowserConfig::default(),
            timeouts: TimeoutsConfig::default(),
            retry: RetryConfig::default(),
            artifacts: ArtifactsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "harness.yaml".
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("harness.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml, |name| std::env::var(name).ok());
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars<L>(input: &str, lookup: L) -> String
where
    L: Fn(&str) -> Option<String>,
{
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match lookup(&cap[1]) {
            Some(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "base_url must be an http(s) URL, got {:?}",
            config.base_url
        )));
    }

    config
        .timeouts
        .poll_policy()
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    if config.retry.max_retries == 0 {
        return Err(ConfigError::ValidationError(
            "retry.max_retries must be at least 1".to_string(),
        ));
    }

    if config.environment.requires_credentials() {
        if config.credentials.username.is_empty() {
            return Err(ConfigError::MissingEnvVar("AQX_USERNAME".to_string()));
        }
        if config.credentials.password.is_empty() {
            return Err(ConfigError::MissingEnvVar("AQX_PASSWORD".to_string()));
        }
    }

    Ok(())
}
