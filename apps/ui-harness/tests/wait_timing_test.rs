//! Integration tests for the poll-until and retry timing contract.
//!
//! Bounds are generous on the upper side so the tests hold on loaded CI
//! machines.

use std::cell::Cell;
use std::time::{Duration, Instant};

use ui_harness::application::ports::{BrowserError, BrowserErrorKind, Locator};
use ui_harness::application::services::ServiceError;
use ui_harness::wait::{
    PollPolicy, RetryPolicy, WaitError, poll_for_condition, poll_for_count, poll_for_value,
    retry, try_poll_for_value,
};

#[test]
fn test_condition_never_true_times_out_after_timeout() {
    let policy = PollPolicy::from_millis(500, 100);
    let checks = Cell::new(0);

    let started = Instant::now();
    let result = poll_for_condition(
        || {
            checks.set(checks.get() + 1);
            false
        },
        &policy,
        "order row visible",
    );
    let elapsed = started.elapsed();

    let err = result.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(
        err.to_string(),
        "order row visible did not become true within 500 ms"
    );
    assert!(elapsed >= Duration::from_millis(500), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(900), "{elapsed:?}");
    assert!((3..=6).contains(&checks.get()), "checks = {}", checks.get());
}

#[test]
fn test_condition_already_true_returns_without_sleeping() {
    let policy = PollPolicy::from_millis(5_000, 1_000);

    let started = Instant::now();
    poll_for_condition(|| true, &policy, "ready").unwrap();

    assert!(started.elapsed() < Duration::from_millis(200));
}

#[test]
fn test_value_accepted_on_third_check() {
    let policy = PollPolicy::from_millis(2_000, 10);
    let readings = ["", "", "42", "43"];
    let checks = Cell::new(0);

    let value = poll_for_value(
        || {
            let reading = readings[checks.get()];
            checks.set(checks.get() + 1);
            reading.to_string()
        },
        |v| !v.is_empty(),
        &policy,
    )
    .unwrap();

    assert_eq!(value, "42");
    assert_eq!(checks.get(), 3);
}

#[test]
fn test_zero_timeout_performs_no_check() {
    let policy = PollPolicy::from_millis(0, 100);
    let checks = Cell::new(0);

    let result = poll_for_condition(
        || {
            checks.set(checks.get() + 1);
            true
        },
        &policy,
        "anything",
    );

    assert!(matches!(result, Err(WaitError::Timeout { timeout_ms: 0, .. })));
    assert_eq!(checks.get(), 0);
}

#[test]
fn test_count_reaches_expected() {
    let policy = PollPolicy::from_millis(2_000, 10);
    let counts = Cell::new(0_usize);

    poll_for_count(
        || {
            counts.set(counts.get() + 1);
            counts.get()
        },
        3,
        &policy,
    )
    .unwrap();

    assert_eq!(counts.get(), 3);
}

#[test]
fn test_extractor_error_propagates_before_timeout() {
    let policy = PollPolicy::from_millis(5_000, 100);

    let started = Instant::now();
    let result: Result<String, ServiceError> = try_poll_for_value(
        || Err(BrowserError::Driver("session closed".to_string()).into()),
        |v: &String| !v.is_empty(),
        &policy,
        "volume filled",
    );

    assert_eq!(
        result.unwrap_err(),
        ServiceError::Browser(BrowserError::Driver("session closed".to_string()))
    );
    assert!(started.elapsed() < Duration::from_millis(200));
}

#[test]
fn test_retry_exhaustion_sleeps_between_attempts_only() {
    let policy = RetryPolicy::from_millis(3, 100);
    let attempts = Cell::new(0);
    let locator = Locator::test_id("trade-button-order");

    let started = Instant::now();
    let result: Result<(), BrowserError> = retry(
        || {
            attempts.set(attempts.get() + 1);
            Err(BrowserError::Detached(locator.clone()))
        },
        &policy,
        &[BrowserErrorKind::Detached],
    );
    let elapsed = started.elapsed();

    assert_eq!(result, Err(BrowserError::Detached(locator)));
    assert_eq!(attempts.get(), 3);
    assert!(elapsed >= Duration::from_millis(200), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(600), "{elapsed:?}");
}

#[test]
fn test_retry_non_retryable_returns_immediately() {
    let policy = RetryPolicy::from_millis(3, 1_000);
    let attempts = Cell::new(0);

    let started = Instant::now();
    let result: Result<(), BrowserError> = retry(
        || {
            attempts.set(attempts.get() + 1);
            Err(BrowserError::NotFound(Locator::css("#missing")))
        },
        &policy,
        &[BrowserErrorKind::Detached],
    );

    assert!(matches!(result, Err(BrowserError::NotFound(_))));
    assert_eq!(attempts.get(), 1);
    assert!(started.elapsed() < Duration::from_millis(200));
}

#[test]
fn test_retry_succeeds_after_transient_failure() {
    let policy = RetryPolicy::from_millis(3, 10);
    let attempts = Cell::new(0);

    let value = retry(
        || {
            attempts.set(attempts.get() + 1);
            if attempts.get() < 2 {
                Err(BrowserError::Detached(Locator::text("Buy")))
            } else {
                Ok("filled")
            }
        },
        &policy,
        &[BrowserErrorKind::Detached],
    )
    .unwrap();

    assert_eq!(value, "filled");
    assert_eq!(attempts.get(), 2);
}

#[test]
fn test_retry_succeeds_on_third_attempt_after_two_delays() {
    let policy = RetryPolicy::from_millis(3, 100);
    let attempts = Cell::new(0);

    let started = Instant::now();
    let result: Result<u32, BrowserError> = retry(
        || {
            attempts.set(attempts.get() + 1);
            if attempts.get() < 3 {
                Err(BrowserError::Detached(Locator::test_id("trade-input-volume")))
            } else {
                Ok(attempts.get())
            }
        },
        &policy,
        &[BrowserErrorKind::Detached],
    );
    let elapsed = started.elapsed();

    assert_eq!(result, Ok(3));
    assert!(elapsed >= Duration::from_millis(200), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(600), "{elapsed:?}");
}
