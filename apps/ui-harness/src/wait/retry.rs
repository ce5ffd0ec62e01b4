//! Retry on retryable errors with a fixed delay.
//!
//! | Outcome of an attempt | Action |
//! |-----------------------|--------|
//! | `Ok` | return the value |
//! | `Err`, kind retryable, attempts left | sleep `delay`, try again |
//! | `Err`, kind not retryable | return the error at once |
//! | `Err` on the last attempt | return that error unchanged |

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors that can be classified for retry decisions.
pub trait ErrorKind {
    /// Discriminant callers list as retryable.
    type Kind: PartialEq;

    /// Kind of this error.
    fn kind(&self) -> Self::Kind;
}

/// Retry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first one (default: 3).
    pub max_attempts: u32,
    /// Pause between attempts (default: 1s).
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(1_000),
        }
    }
}

impl RetryPolicy {
    /// Create a retry policy.
    #[must_use]
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Create a retry policy with the delay in milliseconds.
    #[must_use]
    pub const fn from_millis(max_attempts: u32, delay_ms: u64) -> Self {
        Self::new(max_attempts, Duration::from_millis(delay_ms))
    }

    /// Attempts actually made; zero is treated as a single attempt.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }
}

/// Run `operation`, retrying errors whose kind is in `retryable`.
pub fn retry<T, E, F>(operation: F, policy: &RetryPolicy, retryable: &[E::Kind]) -> Result<T, E>
where
    E: ErrorKind,
    F: FnMut() -> Result<T, E>,
{
    retry_if(operation, policy, |err: &E| retryable.contains(&err.kind()))
}

/// Run `operation`, retrying errors for which `is_retryable` returns true.
pub fn retry_if<T, E, F, P>(
    mut operation: F,
    policy: &RetryPolicy,
    mut is_retryable: P,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    P: FnMut(&E) -> bool,
{
    let attempts = policy.attempts();
    let mut attempt = 1;

    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts && is_retryable(&err) => {
                thread::sleep(policy.delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
