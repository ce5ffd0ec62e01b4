//! Order confirmation dialog.
//!
//! After the order button is pressed the platform shows a dialog whose
//! order-type label must read exactly the expected confirmation text.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{ElementWaits, ServiceError};
use crate::application::ports::{BrowserPort, Locator};
use crate::domain::order_entry::{
    OrderSide, OrderType, confirmation_text, confirmation_text_by_name,
};
use crate::wait::PollPolicy;

/// Where the dialog's elements live on the page under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationLocators {
    /// Button that submits the order.
    pub confirm_button: Locator,
    /// Label showing side and order type.
    pub order_type_label: Locator,
}

/// Checks and confirms the order confirmation dialog.
pub struct ConfirmationDialog<'a, B: BrowserPort + ?Sized> {
    browser: &'a B,
    locators: ConfirmationLocators,
}

impl<'a, B: BrowserPort + ?Sized> ConfirmationDialog<'a, B> {
    /// Bind the dialog to a browser.
    pub const fn new(browser: &'a B, locators: ConfirmationLocators) -> Self {
        Self { browser, locators }
    }

    /// Verify the dialog for labels typed by a test author, e.g. `("Limit", "sell")`.
    ///
    /// Unknown labels fail before the browser is touched. Returns the text that
    /// was matched.
    pub fn verify(
        &self,
        order_type_name: &str,
        order_side_name: &str,
        policy: &PollPolicy,
    ) -> Result<String, ServiceError> {
        let expected = confirmation_text_by_name(order_type_name, order_side_name)?;
        self.verify_text(&expected, policy)?;
        Ok(expected)
    }

    /// Verify the dialog for a typed order.
    pub fn verify_order(
        &self,
        order_type: OrderType,
        order_side: OrderSide,
        policy: &PollPolicy,
    ) -> Result<String, ServiceError> {
        let expected = confirmation_text(order_type, order_side);
        self.verify_text(&expected, policy)?;
        Ok(expected)
    }

    /// `policy.timeout` bounds the whole check: the text wait only gets what
    /// is left after the confirm button showed up.
    fn verify_text(&self, expected: &str, policy: &PollPolicy) -> Result<(), ServiceError> {
        let started = Instant::now();
        self.browser
            .wait_for_visible(&self.locators.confirm_button, policy.timeout)?;

        let remaining = policy.timeout.saturating_sub(started.elapsed());
        ElementWaits::new(self.browser, policy.with_timeout(remaining))
            .wait_for_text(&self.locators.order_type_label, expected)
            .map_err(|err| match err {
                ServiceError::TextMismatch {
                    locator,
                    expected,
                    actual,
                    ..
                } => ServiceError::TextMismatch {
                    locator,
                    expected,
                    actual,
                    timeout_ms: policy.timeout_ms(),
                },
                other => other,
            })?;

        tracing::info!(expected, "Confirmation dialog verified");
        Ok(())
    }

    /// Press the confirm button.
    pub fn confirm(&self) -> Result<(), ServiceError> {
        self.browser.click(&self.locators.confirm_button)?;
        tracing::debug!("Order confirmed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{BrowserError, MockBrowserPort};
    use crate::domain::order_entry::OrderEntryError;
    use mockall::predicate::eq;
    use std::time::Duration;

    fn locators() -> ConfirmationLocators {
        ConfirmationLocators {
            confirm_button: Locator::test_id("confirm"),
            order_type_label: Locator::test_id("confirm-order-type"),
        }
    }

    fn fast() -> PollPolicy {
        PollPolicy::from_millis(200, 5)
    }

    #[test]
    fn verify_matches_expected_text() {
        let mut browser = MockBrowserPort::new();
        browser
            .expect_wait_for_visible()
            .withf(|locator, _| *locator == Locator::test_id("confirm"))
            .times(1)
            .returning(|_, _| Ok(()));
        browser
            .expect_read_text()
            .with(eq(Locator::test_id("confirm-order-type")))
            .returning(|_| Ok("SELL LIMIT".to_string()));

        let dialog = ConfirmationDialog::new(&browser, locators());
        assert_eq!(dialog.verify("Limit", "sell", &fast()).unwrap(), "SELL LIMIT");
    }

    #[test]
    fn unknown_label_never_touches_browser() {
        let browser = MockBrowserPort::new();
        let dialog = ConfirmationDialog::new(&browser, locators());
        assert_eq!(
            dialog.verify("Bracket", "BUY", &fast()).unwrap_err(),
            ServiceError::OrderEntry(OrderEntryError::UnknownOrderType("Bracket".to_string()))
        );
    }

    #[test]
    fn hidden_dialog_is_reported() {
        let mut browser = MockBrowserPort::new();
        browser.expect_wait_for_visible().returning(|locator, timeout| {
            Err(BrowserError::NotVisible {
                locator: locator.clone(),
                timeout_ms: timeout.as_millis() as u64,
            })
        });

        let dialog = ConfirmationDialog::new(&browser, locators());
        let err = dialog
            .verify_order(OrderType::Market, OrderSide::Buy, &fast())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "test-id=confirm not visible within 200 ms"
        );
    }

    #[test]
    fn slow_dialog_shares_one_timeout() {
        let mut browser = MockBrowserPort::new();
        browser.expect_wait_for_visible().returning(|_, _| {
            std::thread::sleep(Duration::from_millis(150));
            Ok(())
        });
        browser.expect_read_text().returning(|_| Ok("BUY".to_string()));

        let policy = PollPolicy::from_millis(300, 10);
        let dialog = ConfirmationDialog::new(&browser, locators());

        let started = Instant::now();
        let err = dialog.verify("Limit", "buy", &policy).unwrap_err();
        let elapsed = started.elapsed();

        assert_eq!(
            err,
            ServiceError::TextMismatch {
                locator: Locator::test_id("confirm-order-type"),
                expected: "BUY LIMIT".to_string(),
                actual: "BUY".to_string(),
                timeout_ms: 300,
            }
        );
        assert!(elapsed >= Duration::from_millis(300), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(500), "{elapsed:?}");
    }

    #[test]
    fn confirm_clicks_button() {
        let mut browser = MockBrowserPort::new();
        browser
            .expect_click()
            .with(eq(Locator::test_id("confirm")))
            .times(1)
            .returning(|_| Ok(()));

        ConfirmationDialog::new(&browser, locators()).confirm().unwrap();
    }
}
