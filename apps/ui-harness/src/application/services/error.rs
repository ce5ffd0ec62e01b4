//! Service errors.

use thiserror::Error;

use crate::application::ports::{BrowserError, Locator};
use crate::domain::order_entry::OrderEntryError;
use crate::wait::WaitError;

/// Errors returned by the application services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The browser driver failed.
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// A wait timed out.
    #[error(transparent)]
    Wait(#[from] WaitError),

    /// An order label could not be resolved.
    #[error(transparent)]
    OrderEntry(#[from] OrderEntryError),

    /// An element kept showing the wrong text until the timeout.
    #[error("{locator} shows \"{actual}\", expected \"{expected}\" within {timeout_ms} ms")]
    TextMismatch {
        /// Element locator.
        locator: Locator,
        /// Expected text.
        expected: String,
        /// Last text read.
        actual: String,
        /// Timeout in milliseconds.
        timeout_ms: u64,
    },
}
