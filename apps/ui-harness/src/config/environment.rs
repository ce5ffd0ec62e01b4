//! Target environment of the platform under test.

use serde::{Deserialize, Serialize};

/// Deployment the tests run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development deployment (default).
    #[default]
    Development,
    /// Staging deployment.
    Staging,
    /// Production deployment.
    Production,
}

impl Environment {
    /// Resolve an environment name, falling back to development for missing
    /// or unknown names.
    #[must_use]
    pub fn from_env_or_default(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }

    /// Base URL used when no override variable is set.
    #[must_use]
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::Development | Self::Production => "https://aqxtrader.aquariux.com",
            Self::Staging => "https://staging.aqxtrader.aquariux.com",
        }
    }

    /// Variable that overrides the base URL, if any.
    #[must_use]
    pub const fn base_url_var(&self) -> Option<&'static str> {
        match self {
            Self::Development => None,
            Self::Staging => Some("STAGING_URL"),
            Self::Production => Some("PROD_URL"),
        }
    }

    /// Returns true if credentials must come from the environment.
    #[must_use]
    pub const fn requires_credentials(&self) -> bool {
        !matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Must be development, staging or production."
            )),
        }
    }
}
