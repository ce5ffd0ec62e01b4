//! Layered resolution: environment defaults, then variable overrides.

use super::{BrowserKind, Config, ConfigError, Environment};

/// Variable selecting the environment.
pub const TEST_ENV_VAR: &str = "TEST_ENV";

/// Resolve the configuration for `environment`, reading overrides through
/// `lookup`. Empty values count as unset.
///
/// | Variable | Field |
/// |----------|-------|
/// | `BROWSER` | `browser.kind` (unknown names launch Chromium) |
/// | `HEADLESS` | `browser.headless` (`"true"`, any case) |
/// | `SLOW_MO` | `browser.slow_mo_ms` |
/// | `STAGING_URL` / `PROD_URL` | `base_url` for staging / production |
/// | `AQX_USERNAME`, `AQX_PASSWORD` | `credentials` |
/// | `RUST_LOG` | `logging.level` |
/// | `HARNESS_ARTIFACTS_DIR` | `artifacts.root_dir` |
pub fn resolve_config<L>(environment: Environment, lookup: L) -> Result<Config, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
    let mut config = Config::defaults_for(environment);

    if let Some(browser) = var("BROWSER") {
        config.browser.kind = BrowserKind::from_name(&browser);
    }
    if let Some(headless) = var("HEADLESS") {
        config.browser.headless = headless.eq_ignore_ascii_case("true");
    }
    if let Some(slow_mo) = var("SLOW_MO") {
        config.browser.slow_mo_ms = slow_mo.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: "SLOW_MO".to_string(),
            value: slow_mo.clone(),
        })?;
    }
    if let Some(url) = environment.base_url_var().and_then(&var) {
        config.base_url = url;
    }
    if let Some(username) = var("AQX_USERNAME") {
        config.credentials.username = username;
    }
    if let Some(password) = var("AQX_PASSWORD") {
        config.credentials.password = password;
    }
    if let Some(level) = var("RUST_LOG") {
        config.logging.level = level;
    }
    if let Some(root) = var("HARNESS_ARTIFACTS_DIR") {
        config.artifacts.root_dir = root.into();
    }

    Ok(config)
}

/// Resolve from the process environment; `TEST_ENV` picks the environment
/// (development when unset or unknown).
pub fn resolve_from_env() -> Result<Config, ConfigError> {
    let environment = Environment::from_env_or_default(std::env::var(TEST_ENV_VAR).ok().as_deref());
    resolve_config(environment, |name| std::env::var(name).ok())
}
