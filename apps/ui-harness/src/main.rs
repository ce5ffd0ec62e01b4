//! UI Harness Binary
//!
//! Offline smoke check of the harness wiring: resolves and validates the
//! configuration, prepares artifact directories and logging, then drives the
//! confirmation-dialog check against a scripted browser for every order type
//! and side.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ui-harness
//! ```
//!
//! # Environment Variables
//!
//! ## Required (staging, production)
//! - `AQX_USERNAME`: Platform login
//! - `AQX_PASSWORD`: Platform password
//!
//! ## Optional
//! - `TEST_ENV`: development | staging | production (default: development)
//! - `STAGING_URL` / `PROD_URL`: Base URL override
//! - `BROWSER`: chromium | firefox | webkit (default: chromium)
//! - `HEADLESS`: true | false (default: false)
//! - `SLOW_MO`: Delay between driver actions in ms (default: 0)
//! - `HARNESS_ARTIFACTS_DIR`: Root of reports/screenshots/logs/traces (default: .)
//! - `RUST_LOG`: Console log level (default: info)

use anyhow::Context;
use ui_harness::application::ports::Locator;
use ui_harness::application::services::{ConfirmationDialog, ConfirmationLocators};
use ui_harness::config::{Config, resolve_from_env, validate_config};
use ui_harness::infrastructure::browser::ScriptedBrowser;
use ui_harness::observability::LoggingContext;
use ui_harness::{OrderSide, OrderType, PollPolicy, confirmation_text};

fn main() -> anyhow::Result<()> {
    // Missing .env is fine; variables may come from the shell.
    let _ = dotenvy::dotenv();

    let config = resolve_from_env().context("resolving configuration")?;
    validate_config(&config).context("validating configuration")?;
    config
        .artifacts
        .create_directories()
        .context("creating artifact directories")?;

    let logging = LoggingContext::init(&config.logging, &config.artifacts)?;
    log_config(&config);

    let policy = config.timeouts.poll_policy();
    let result = check_confirmation_matrix(&policy);

    match &result {
        Ok(checked) => tracing::info!(checked, "Confirmation matrix verified"),
        Err(e) => tracing::error!(error = %e, "Confirmation matrix failed"),
    }

    logging.shutdown();
    result.map(|_| ())
}

fn log_config(config: &Config) {
    tracing::info!(
        environment = %config.environment,
        base_url = %config.base_url,
        browser = ?config.browser.kind,
        headless = config.browser.headless,
        credentials = config.credentials.is_complete(),
        "Configuration resolved"
    );
    tracing::debug!(
        poll_timeout_ms = config.timeouts.poll_timeout_ms,
        poll_interval_ms = config.timeouts.poll_interval_ms,
        max_retries = config.retry.max_retries,
        artifacts = %config.artifacts.root_dir.display(),
        "Harness settings"
    );
}

fn check_confirmation_matrix(policy: &PollPolicy) -> anyhow::Result<usize> {
    let locators = ConfirmationLocators {
        confirm_button: Locator::test_id("trade-button-order"),
        order_type_label: Locator::test_id("trade-confirmation-order-type"),
    };

    let mut checked = 0;
    for order_type in OrderType::ALL {
        for side in OrderSide::ALL {
            let expected = confirmation_text(order_type, side);

            let browser = ScriptedBrowser::new();
            browser
                .show(locators.confirm_button.clone())
                .script_text(locators.order_type_label.clone(), [expected.as_str()]);

            let dialog = ConfirmationDialog::new(&browser, locators.clone());
            let shown = dialog
                .verify_order(order_type, side, policy)
                .with_context(|| format!("{order_type} {side}"))?;
            dialog.confirm()?;

            println!("{:<12} {:<5} {shown}", order_type.label(), side.as_str());
            checked += 1;
        }
    }
    Ok(checked)
}
