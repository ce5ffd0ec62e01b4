//! Timeout and retry settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::wait::{PollPolicy, RetryPolicy};

/// Timeouts, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    /// Default timeout for driver operations.
    #[serde(default = "default_timeout_ms")]
    pub default_ms: u64,
    /// Page navigation timeout.
    #[serde(default = "default_timeout_ms")]
    pub navigation_ms: u64,
    /// Timeout for single actions (click, fill).
    #[serde(default = "default_action_ms")]
    pub action_ms: u64,
    /// Overall budget of poll-until waits.
    #[serde(default = "default_action_ms")]
    pub poll_timeout_ms: u64,
    /// Pause between poll checks.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            default_ms: default_timeout_ms(),
            navigation_ms: default_timeout_ms(),
            action_ms: default_action_ms(),
            poll_timeout_ms: default_action_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl TimeoutsConfig {
    /// Poll policy for waits.
    #[must_use]
    pub const fn poll_policy(&self) -> PollPolicy {
        PollPolicy::from_millis(self.poll_timeout_ms, self.poll_interval_ms)
    }

    /// Action timeout.
    #[must_use]
    pub const fn action(&self) -> Duration {
        Duration::from_millis(self.action_ms)
    }

    /// Navigation timeout.
    #[must_use]
    pub const fn navigation(&self) -> Duration {
        Duration::from_millis(self.navigation_ms)
    }
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_action_ms() -> u64 {
    10_000
}

const fn default_poll_interval_ms() -> u64 {
    100
}

/// Retry settings for flaky UI steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay between attempts, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl RetryConfig {
    /// Retry policy for [`crate::wait::retry`].
    #[must_use]
    pub const fn policy(&self) -> RetryPolicy {
        RetryPolicy::from_millis(self.max_retries, self.retry_delay_ms)
    }
}

const fn default_max_retries() -> u32 {
    3
}

const fn default_retry_delay_ms() -> u64 {
    1_000
}
