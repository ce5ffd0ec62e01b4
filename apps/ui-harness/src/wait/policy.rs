//! Poll timing policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::WaitError;

/// Default overall wait, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default pause between checks, in milliseconds.
pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 100;

/// How long to keep polling and how often to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollPolicy {
    /// Overall time budget measured from the first check.
    pub timeout: Duration,
    /// Pause between consecutive checks.
    pub check_interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TIMEOUT_MS, DEFAULT_CHECK_INTERVAL_MS)
    }
}

impl PollPolicy {
    /// Create a policy from millisecond values.
    #[must_use]
    pub const fn from_millis(timeout_ms: u64, check_interval_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            check_interval: Duration::from_millis(check_interval_ms),
        }
    }

    /// Same interval, different timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout in whole milliseconds, as reported in errors.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    /// True when the interval is not shorter than the timeout, so at most one
    /// check can happen.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.check_interval >= self.timeout
    }

    /// Reject zero durations and degenerate intervals.
    pub fn validate(&self) -> Result<(), WaitError> {
        if self.timeout.is_zero() {
            return Err(WaitError::InvalidPolicy(
                "timeout must be positive".to_string(),
            ));
        }
        if self.check_interval.is_zero() {
            return Err(WaitError::InvalidPolicy(
                "check_interval must be positive".to_string(),
            ));
        }
        if self.is_degenerate() {
            return Err(WaitError::InvalidPolicy(format!(
                "check_interval ({} ms) must be shorter than timeout ({} ms)",
                self.check_interval.as_millis(),
                self.timeout.as_millis()
            )));
        }
        Ok(())
    }
}
