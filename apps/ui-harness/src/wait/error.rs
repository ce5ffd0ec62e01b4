//! Wait errors.

use thiserror::Error;

/// Errors produced by the poll primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitError {
    /// The condition never held within the configured window.
    #[error("{condition} did not become true within {timeout_ms} ms")]
    Timeout {
        /// Description of the awaited condition.
        condition: String,
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// A poll policy failed validation.
    #[error("invalid poll policy: {0}")]
    InvalidPolicy(String),
}

impl WaitError {
    /// Build a timeout error.
    pub fn timeout(condition: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            condition: condition.into(),
            timeout_ms,
        }
    }

    /// Returns true for [`WaitError::Timeout`].
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
