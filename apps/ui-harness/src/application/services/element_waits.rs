//! Waits on rendered page state.
//!
//! Reads that fail because the element is missing or was re-rendered count as
//! "not ready yet"; any other driver error aborts the wait.

use std::cell::RefCell;

use rust_decimal::Decimal;

use super::ServiceError;
use crate::application::ports::{BrowserError, BrowserErrorKind, BrowserPort, Locator};
use crate::wait::{self, ErrorKind, PollPolicy, WaitError};

/// Driver errors that mean the page is still rendering.
const PENDING_KINDS: [BrowserErrorKind; 2] =
    [BrowserErrorKind::NotFound, BrowserErrorKind::Detached];

/// Waits bound to a browser and a default poll policy.
pub struct ElementWaits<'a, B: BrowserPort + ?Sized> {
    browser: &'a B,
    policy: PollPolicy,
}

impl<'a, B: BrowserPort + ?Sized> ElementWaits<'a, B> {
    /// Create waits using `policy` for every call.
    pub const fn new(browser: &'a B, policy: PollPolicy) -> Self {
        Self { browser, policy }
    }

    /// Same browser, different policy.
    #[must_use]
    pub const fn with_policy(&self, policy: PollPolicy) -> Self {
        Self {
            browser: self.browser,
            policy,
        }
    }

    /// Policy used by this instance.
    #[must_use]
    pub const fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Wait until an input holds a non-blank value and return it.
    pub fn wait_for_input_value(&self, locator: &Locator) -> Result<String, ServiceError> {
        tracing::debug!(locator = %locator, "Waiting for input value");

        let value = wait::try_poll_for_value(
            || pending_as_none(self.browser.read_value(locator)),
            |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty()),
            &self.policy,
            &format!("input value of {locator} populated"),
        )
        .inspect_err(|e| tracing::warn!(locator = %locator, error = %e, "Input value wait failed"))?
        .unwrap_or_default();

        tracing::debug!(locator = %locator, value = %value, "Input value populated");
        Ok(value)
    }

    /// Wait until an input holds a number and return it.
    pub fn wait_for_numeric_value(&self, locator: &Locator) -> Result<Decimal, ServiceError> {
        tracing::debug!(locator = %locator, "Waiting for numeric input value");

        let number = wait::try_poll_for_value(
            || {
                pending_as_none(self.browser.read_value(locator))
                    .map(|value| value.and_then(|v| wait::parse_number(&v)))
            },
            Option::is_some,
            &self.policy,
            &format!("numeric value in {locator}"),
        )
        .inspect_err(|e| {
            tracing::warn!(locator = %locator, error = %e, "Numeric value wait failed");
        })?
        .unwrap_or_default();

        tracing::debug!(locator = %locator, value = %number, "Numeric value populated");
        Ok(number)
    }

    /// Wait until exactly `expected` elements match the locator.
    pub fn wait_for_element_count(
        &self,
        locator: &Locator,
        expected: usize,
    ) -> Result<(), ServiceError> {
        tracing::debug!(locator = %locator, expected, "Waiting for element count");

        let last_seen = RefCell::new(None);
        let result: Result<(), ServiceError> = wait::try_poll_for_condition(
            || {
                let count = self.browser.count(locator)?;
                *last_seen.borrow_mut() = Some(count);
                Ok(count == expected)
            },
            &self.policy,
            &format!("{expected} elements matching {locator}"),
        );

        if let Err(ref e) = result {
            tracing::warn!(
                locator = %locator,
                expected,
                last_seen = ?last_seen.borrow(),
                error = %e,
                "Element count wait failed"
            );
        }
        result
    }

    /// Wait until the element's trimmed text equals `expected`.
    pub fn wait_for_text(&self, locator: &Locator, expected: &str) -> Result<(), ServiceError> {
        tracing::debug!(locator = %locator, expected, "Waiting for text");

        let last_text = RefCell::new(String::new());
        let result: Result<(), ServiceError> = wait::try_poll_for_condition(
            || {
                let Some(text) = pending_as_none(self.browser.read_text(locator))? else {
                    return Ok(false);
                };
                let matches = text.trim() == expected;
                *last_text.borrow_mut() = text.trim().to_string();
                Ok(matches)
            },
            &self.policy,
            &format!("text of {locator} equal to \"{expected}\""),
        );

        match result {
            Err(ServiceError::Wait(WaitError::Timeout { timeout_ms, .. })) => {
                let actual = last_text.into_inner();
                tracing::warn!(
                    locator = %locator,
                    expected,
                    actual = %actual,
                    "Text never matched"
                );
                Err(ServiceError::TextMismatch {
                    locator: locator.clone(),
                    expected: expected.to_string(),
                    actual,
                    timeout_ms,
                })
            }
            other => other,
        }
    }
}

fn pending_as_none<T>(read: Result<T, BrowserError>) -> Result<Option<T>, ServiceError> {
    match read {
        Ok(value) => Ok(Some(value)),
        Err(err) if PENDING_KINDS.contains(&err.kind()) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockBrowserPort;
    use mockall::Sequence;
    use rust_decimal_macros::dec;

    fn fast() -> PollPolicy {
        PollPolicy::from_millis(200, 5)
    }

    #[test]
    fn input_value_skips_blank_readings() {
        let mut browser = MockBrowserPort::new();
        let mut seq = Sequence::new();
        browser
            .expect_read_value()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok("  ".to_string()));
        browser
            .expect_read_value()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("0.1".to_string()));

        let waits = ElementWaits::new(&browser, fast());
        let value = waits
            .wait_for_input_value(&Locator::test_id("trade-input-volume"))
            .unwrap();
        assert_eq!(value, "0.1");
    }

    #[test]
    fn input_value_treats_missing_element_as_pending() {
        let mut browser = MockBrowserPort::new();
        let mut seq = Sequence::new();
        browser
            .expect_read_value()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|l| Err(BrowserError::NotFound(l.clone())));
        browser
            .expect_read_value()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("12".to_string()));

        let waits = ElementWaits::new(&browser, fast());
        assert_eq!(waits.wait_for_input_value(&Locator::test_id("sl")).unwrap(), "12");
    }

    #[test]
    fn driver_failure_aborts_wait() {
        let mut browser = MockBrowserPort::new();
        browser
            .expect_read_value()
            .times(1)
            .returning(|_| Err(BrowserError::Driver("page crashed".to_string())));

        let waits = ElementWaits::new(&browser, fast());
        let err = waits.wait_for_input_value(&Locator::test_id("tp")).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Browser(BrowserError::Driver("page crashed".to_string()))
        );
    }

    #[test]
    fn numeric_value_waits_for_a_number() {
        let mut browser = MockBrowserPort::new();
        let mut seq = Sequence::new();
        browser
            .expect_read_value()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("--".to_string()));
        browser
            .expect_read_value()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("1.17283".to_string()));

        let waits = ElementWaits::new(&browser, fast());
        let value = waits
            .wait_for_numeric_value(&Locator::test_id("trade-input-stoploss-price"))
            .unwrap();
        assert_eq!(value, dec!(1.17283));
    }

    #[test]
    fn element_count_times_out() {
        let mut browser = MockBrowserPort::new();
        browser.expect_count().returning(|_| Ok(1));

        let waits = ElementWaits::new(&browser, PollPolicy::from_millis(30, 5));
        let err = waits
            .wait_for_element_count(&Locator::css("tr.order-row"), 2)
            .unwrap_err();
        assert!(matches!(err, ServiceError::Wait(WaitError::Timeout { timeout_ms: 30, .. })));
    }

    #[test]
    fn text_mismatch_reports_last_text() {
        let mut browser = MockBrowserPort::new();
        browser
            .expect_read_text()
            .returning(|_| Ok(" BUY ".to_string()));

        let locator = Locator::test_id("trade-confirmation-order-type");
        let waits = ElementWaits::new(&browser, PollPolicy::from_millis(30, 5));
        let err = waits.wait_for_text(&locator, "BUY LIMIT").unwrap_err();
        assert_eq!(
            err,
            ServiceError::TextMismatch {
                locator,
                expected: "BUY LIMIT".to_string(),
                actual: "BUY".to_string(),
                timeout_ms: 30,
            }
        );
    }

    #[test]
    fn with_policy_overrides_timeout() {
        let browser = MockBrowserPort::new();
        let waits = ElementWaits::new(&browser, fast());
        let longer = waits.with_policy(PollPolicy::from_millis(5_000, 50));
        assert_eq!(longer.policy().timeout_ms(), 5_000);
        assert_eq!(waits.policy().timeout_ms(), 200);
    }
}
