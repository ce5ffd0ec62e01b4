//! Crate-level error handling for the harness.
//!
//! Each module owns a `thiserror` enum; [`HarnessError`] gathers them so a
//! test run can report one classified failure.
//!
//! # Error Codes
//!
//! | Code | Source |
//! |------|--------|
//! | `INVALID_CONFIG` | Config file or values rejected |
//! | `MISSING_CREDENTIALS` | Staging/production run without login |
//! | `LOGGING_SETUP` | Log layers could not be installed |
//! | `UNKNOWN_ORDER_LABEL` | Order type/side/expiry name not recognised |
//! | `WAIT_TIMEOUT` | A poll-until wait expired |
//! | `INVALID_POLICY` | A poll policy was rejected |
//! | `ELEMENT_NOT_FOUND` | No element matched a locator |
//! | `ELEMENT_NOT_VISIBLE` | Element stayed hidden |
//! | `NAVIGATION_FAILED` | Page load failed |
//! | `STALE_ELEMENT` | Element detached mid-read |
//! | `TEXT_MISMATCH` | Element text never matched |
//! | `DRIVER_ERROR` | Any other driver failure |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::BrowserError;
use crate::application::services::ServiceError;
use crate::config::ConfigError;
use crate::domain::order_entry::OrderEntryError;
use crate::observability::LoggingError;
use crate::wait::WaitError;

/// Classification of harness failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Setup errors
    /// Config file or values rejected.
    InvalidConfig,
    /// Credentials required but not provided.
    MissingCredentials,
    /// Logging could not be initialised.
    LoggingSetup,

    // Order entry errors
    /// Order type, side or expiry name not recognised.
    UnknownOrderLabel,

    // Wait errors
    /// A wait expired.
    WaitTimeout,
    /// A poll policy was rejected.
    InvalidPolicy,

    // Browser errors
    /// No element matched.
    ElementNotFound,
    /// Element never became visible.
    ElementNotVisible,
    /// Navigation failed.
    NavigationFailed,
    /// Element detached from the page.
    StaleElement,
    /// Element text never matched.
    TextMismatch,
    /// Other driver failure.
    DriverError,
}

impl ErrorCode {
    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::LoggingSetup => "LOGGING_SETUP",
            Self::UnknownOrderLabel => "UNKNOWN_ORDER_LABEL",
            Self::WaitTimeout => "WAIT_TIMEOUT",
            Self::InvalidPolicy => "INVALID_POLICY",
            Self::ElementNotFound => "ELEMENT_NOT_FOUND",
            Self::ElementNotVisible => "ELEMENT_NOT_VISIBLE",
            Self::NavigationFailed => "NAVIGATION_FAILED",
            Self::StaleElement => "STALE_ELEMENT",
            Self::TextMismatch => "TEXT_MISMATCH",
            Self::DriverError => "DRIVER_ERROR",
        }
    }

    /// Returns true for failures of the environment rather than the page
    /// under test.
    #[must_use]
    pub const fn is_setup(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig | Self::MissingCredentials | Self::LoggingSetup
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Any failure raised by the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging setup failure.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// Application service failure.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Unresolved order label.
    #[error(transparent)]
    OrderEntry(#[from] OrderEntryError),

    /// Wait failure.
    #[error(transparent)]
    Wait(#[from] WaitError),

    /// Browser failure.
    #[error(transparent)]
    Browser(#[from] BrowserError),
}

impl HarnessError {
    /// Classify this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Config(ConfigError::MissingEnvVar(_)) => ErrorCode::MissingCredentials,
            Self::Config(_) => ErrorCode::InvalidConfig,
            Self::Logging(_) => ErrorCode::LoggingSetup,
            Self::OrderEntry(_) => ErrorCode::UnknownOrderLabel,
            Self::Wait(e) => wait_code(e),
            Self::Browser(e) => browser_code(e),
            Self::Service(e) => match e {
                ServiceError::Browser(e) => browser_code(e),
                ServiceError::Wait(e) => wait_code(e),
                ServiceError::OrderEntry(_) => ErrorCode::UnknownOrderLabel,
                ServiceError::TextMismatch { .. } => ErrorCode::TextMismatch,
            },
        }
    }
}

const fn wait_code(error: &WaitError) -> ErrorCode {
    match error {
        WaitError::Timeout { .. } => ErrorCode::WaitTimeout,
        WaitError::InvalidPolicy(_) => ErrorCode::InvalidPolicy,
    }
}

const fn browser_code(error: &BrowserError) -> ErrorCode {
    match error {
        BrowserError::NotFound(_) => ErrorCode::ElementNotFound,
        BrowserError::NotVisible { .. } => ErrorCode::ElementNotVisible,
        BrowserError::Navigation { .. } => ErrorCode::NavigationFailed,
        BrowserError::Detached(_) => ErrorCode::StaleElement,
        BrowserError::Driver(_) => ErrorCode::DriverError,
    }
}
