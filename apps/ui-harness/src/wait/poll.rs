//! Fixed-interval polling.
//!
//! Every primitive records the wall-clock start on entry, checks, then sleeps
//! for the check interval (never past the deadline) until the timeout has
//! elapsed. A zero timeout performs no check at all.

use std::cell::Cell;
use std::str::FromStr;
use std::thread;
use std::time::Instant;

use rust_decimal::Decimal;

use super::{PollPolicy, WaitError};

/// Core loop shared by all primitives.
///
/// `check` returns `Ok(Some(_))` to finish, `Ok(None)` to keep polling and
/// `Err(_)` to abort immediately. `describe` is only called on timeout.
fn poll_until<T, E, C, D>(policy: &PollPolicy, describe: D, mut check: C) -> Result<T, E>
where
    E: From<WaitError>,
    C: FnMut() -> Result<Option<T>, E>,
    D: FnOnce() -> String,
{
    let started = Instant::now();

    while started.elapsed() < policy.timeout {
        if let Some(value) = check()? {
            return Ok(value);
        }

        let remaining = policy.timeout.saturating_sub(started.elapsed());
        if remaining.is_zero() {
            break;
        }
        thread::sleep(policy.check_interval.min(remaining));
    }

    Err(WaitError::timeout(describe(), policy.timeout_ms()).into())
}

/// Poll `extract` until `is_acceptable` holds for the value it returns.
pub fn poll_for_value<T, F, P>(
    mut extract: F,
    is_acceptable: P,
    policy: &PollPolicy,
) -> Result<T, WaitError>
where
    F: FnMut() -> T,
    P: Fn(&T) -> bool,
{
    poll_until(
        policy,
        || "acceptable value".to_string(),
        || {
            let value = extract();
            Ok::<_, WaitError>(is_acceptable(&value).then_some(value))
        },
    )
}

/// Fallible [`poll_for_value`]: extractor errors abort the wait and are
/// returned unchanged, a timeout is converted into `E`.
pub fn try_poll_for_value<T, E, F, P>(
    mut extract: F,
    is_acceptable: P,
    policy: &PollPolicy,
    condition: &str,
) -> Result<T, E>
where
    E: From<WaitError>,
    F: FnMut() -> Result<T, E>,
    P: Fn(&T) -> bool,
{
    poll_until(
        policy,
        || condition.to_string(),
        || {
            let value = extract()?;
            Ok(is_acceptable(&value).then_some(value))
        },
    )
}

/// First value whose trimmed form is non-empty.
pub fn poll_for_non_empty<F>(mut extract: F, policy: &PollPolicy) -> Result<String, WaitError>
where
    F: FnMut() -> String,
{
    poll_until(
        policy,
        || "non-empty value".to_string(),
        || {
            let value = extract();
            Ok::<_, WaitError>((!value.trim().is_empty()).then_some(value))
        },
    )
}

/// First value that parses as a number.
pub fn poll_for_numeric<F>(mut extract: F, policy: &PollPolicy) -> Result<Decimal, WaitError>
where
    F: FnMut() -> String,
{
    poll_until(
        policy,
        || "numeric value".to_string(),
        || Ok::<_, WaitError>(parse_number(&extract())),
    )
}

/// Poll `condition` until it returns true.
pub fn poll_for_condition<F>(
    mut condition: F,
    policy: &PollPolicy,
    message: &str,
) -> Result<(), WaitError>
where
    F: FnMut() -> bool,
{
    poll_until(
        policy,
        || message.to_string(),
        || Ok::<_, WaitError>(condition().then_some(())),
    )
}

/// Fallible [`poll_for_condition`].
pub fn try_poll_for_condition<E, F>(
    mut condition: F,
    policy: &PollPolicy,
    message: &str,
) -> Result<(), E>
where
    E: From<WaitError>,
    F: FnMut() -> Result<bool, E>,
{
    poll_until(policy, || message.to_string(), || Ok(condition()?.then_some(())))
}

/// Poll `count_of` until it equals `expected`.
pub fn poll_for_count<F>(
    mut count_of: F,
    expected: usize,
    policy: &PollPolicy,
) -> Result<(), WaitError>
where
    F: FnMut() -> usize,
{
    let last_seen = Cell::new(None);

    poll_until(
        policy,
        || match last_seen.get() {
            Some(last) => format!("count of {expected} (last seen {last})"),
            None => format!("count of {expected}"),
        },
        || {
            let count = count_of();
            last_seen.set(Some(count));
            Ok::<_, WaitError>((count == expected).then_some(()))
        },
    )
}

pub(crate) fn parse_number(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    fn fast() -> PollPolicy {
        PollPolicy::from_millis(300, 5)
    }

    fn sequence(values: &[&str]) -> impl FnMut() -> String {
        let values: Vec<String> = values.iter().map(|v| (*v).to_string()).collect();
        let mut index = 0;
        move || {
            let value = values[index.min(values.len() - 1)].clone();
            index += 1;
            value
        }
    }

    #[test]
    fn value_first_acceptable_wins() {
        let mut calls = 0;
        let mut source = sequence(&["", "", "42", "43"]);
        let value = poll_for_value(
            || {
                calls += 1;
                source()
            },
            |v: &String| !v.is_empty(),
            &fast(),
        )
        .unwrap();

        assert_eq!(value, "42");
        assert_eq!(calls, 3);
    }

    #[test]
    fn non_empty_ignores_whitespace() {
        let value = poll_for_non_empty(sequence(&["  ", "\t", " 0.10 "]), &fast()).unwrap();
        assert_eq!(value, " 0.10 ");
    }

    #[test]
    fn non_empty_timeout_names_condition() {
        let err =
            poll_for_non_empty(|| String::new(), &PollPolicy::from_millis(30, 5)).unwrap_err();
        assert_eq!(
            err,
            WaitError::Timeout {
                condition: "non-empty value".to_string(),
                timeout_ms: 30,
            }
        );
    }

    #[test]
    fn numeric_skips_unparseable_values() {
        let value = poll_for_numeric(sequence(&["", "--", "abc", "1.2345"]), &fast()).unwrap();
        assert_eq!(value, dec!(1.2345));
    }

    #[test]
    fn numeric_accepts_scientific_notation() {
        assert_eq!(parse_number("1e-3"), Some(dec!(0.001)));
        assert_eq!(parse_number(" 12 "), Some(dec!(12)));
        assert_eq!(parse_number("--"), None);
    }

    #[test]
    fn condition_true_on_first_check() {
        let mut calls = 0;
        poll_for_condition(
            || {
                calls += 1;
                true
            },
            &fast(),
            "ready",
        )
        .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn condition_timeout_carries_message() {
        let err = poll_for_condition(|| false, &PollPolicy::from_millis(20, 5), "dialog closed")
            .unwrap_err();
        assert_eq!(err.to_string(), "dialog closed did not become true within 20 ms");
    }

    #[test]
    fn count_reports_last_seen_value() {
        let err = poll_for_count(|| 2, 3, &PollPolicy::from_millis(20, 5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "count of 3 (last seen 2) did not become true within 20 ms"
        );
    }

    #[test]
    fn count_reaches_expected() {
        let mut count = 0;
        poll_for_count(
            || {
                count += 1;
                count
            },
            4,
            &fast(),
        )
        .unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn zero_timeout_never_checks() {
        let mut calls = 0;
        let result = poll_for_condition(
            || {
                calls += 1;
                true
            },
            &PollPolicy::from_millis(0, 5),
            "never checked",
        );
        assert!(result.unwrap_err().is_timeout());
        assert_eq!(calls, 0);
    }

    #[test]
    fn degenerate_policy_checks_once() {
        let mut calls = 0;
        let policy = PollPolicy {
            timeout: Duration::from_millis(10),
            check_interval: Duration::from_millis(50),
        };
        let result = poll_for_condition(
            || {
                calls += 1;
                false
            },
            &policy,
            "flag",
        );
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[derive(Debug, PartialEq)]
    enum ProbeError {
        Gone,
        Wait(WaitError),
    }

    impl From<WaitError> for ProbeError {
        fn from(err: WaitError) -> Self {
            Self::Wait(err)
        }
    }

    #[test]
    fn try_value_propagates_extractor_error_immediately() {
        let mut calls = 0;
        let result: Result<String, ProbeError> = try_poll_for_value(
            || {
                calls += 1;
                if calls < 2 {
                    Ok(String::new())
                } else {
                    Err(ProbeError::Gone)
                }
            },
            |v: &String| !v.is_empty(),
            &fast(),
            "value",
        );
        assert_eq!(result, Err(ProbeError::Gone));
        assert_eq!(calls, 2);
    }

    #[test]
    fn try_condition_converts_timeout() {
        let result: Result<(), ProbeError> =
            try_poll_for_condition(|| Ok(false), &PollPolicy::from_millis(20, 5), "row gone");
        assert_eq!(
            result,
            Err(ProbeError::Wait(WaitError::timeout("row gone", 20)))
        );
    }
}
