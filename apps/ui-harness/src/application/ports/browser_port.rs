//! Browser Port (Driven Port)
//!
//! Minimal capability interface over a browser-automation driver: navigate,
//! locate, wait for visibility, read, fill and click.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::wait::ErrorKind;

/// How to find an element on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum Locator {
    /// `data-testid` attribute.
    TestId(String),
    /// Visible text content.
    Text {
        /// Text to look for.
        text: String,
        /// Whole-string match instead of substring.
        exact: bool,
    },
    /// Raw CSS selector.
    Css(String),
}

impl Locator {
    /// Find by test id.
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    /// Find by text, substring match.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            exact: false,
        }
    }

    /// Find by text, whole-string match.
    pub fn exact_text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            exact: true,
        }
    }

    /// Find by CSS selector.
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TestId(id) => write!(f, "test-id={id}"),
            Self::Text { text, exact: true } => write!(f, "text=\"{text}\""),
            Self::Text { text, exact: false } => write!(f, "text~\"{text}\""),
            Self::Css(selector) => write!(f, "css={selector}"),
        }
    }
}

/// Browser driver error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    /// No element matched the locator.
    #[error("no element matches {0}")]
    NotFound(Locator),

    /// The element did not become visible in time.
    #[error("{locator} not visible within {timeout_ms} ms")]
    NotVisible {
        /// Element locator.
        locator: Locator,
        /// Visibility timeout in milliseconds.
        timeout_ms: u64,
    },

    /// Navigation failed.
    #[error("navigation to {url} failed: {message}")]
    Navigation {
        /// Target URL.
        url: String,
        /// Driver message.
        message: String,
    },

    /// The element was re-rendered while being used.
    #[error("{0} was detached from the page")]
    Detached(Locator),

    /// Any other driver failure.
    #[error("browser driver error: {0}")]
    Driver(String),
}

/// Retry classification for [`BrowserError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserErrorKind {
    /// [`BrowserError::NotFound`].
    NotFound,
    /// [`BrowserError::NotVisible`].
    NotVisible,
    /// [`BrowserError::Navigation`].
    Navigation,
    /// [`BrowserError::Detached`].
    Detached,
    /// [`BrowserError::Driver`].
    Driver,
}

impl ErrorKind for BrowserError {
    type Kind = BrowserErrorKind;

    fn kind(&self) -> BrowserErrorKind {
        match self {
            Self::NotFound(_) => BrowserErrorKind::NotFound,
            Self::NotVisible { .. } => BrowserErrorKind::NotVisible,
            Self::Navigation { .. } => BrowserErrorKind::Navigation,
            Self::Detached(_) => BrowserErrorKind::Detached,
            Self::Driver(_) => BrowserErrorKind::Driver,
        }
    }
}

/// Browser capabilities the harness relies on.
///
/// Calls block the current thread. Implementations own and synchronize the
/// underlying page handle.
#[cfg_attr(test, mockall::automock)]
pub trait BrowserPort {
    /// Load a URL in the current page.
    fn navigate(&self, url: &str) -> Result<(), BrowserError>;

    /// Block until the element is visible or `timeout` elapses.
    fn wait_for_visible(&self, locator: &Locator, timeout: Duration) -> Result<(), BrowserError>;

    /// Rendered text content of the element.
    fn read_text(&self, locator: &Locator) -> Result<String, BrowserError>;

    /// Current value of an input element.
    fn read_value(&self, locator: &Locator) -> Result<String, BrowserError>;

    /// Replace the value of an input element.
    fn fill(&self, locator: &Locator, value: &str) -> Result<(), BrowserError>;

    /// Click the element.
    fn click(&self, locator: &Locator) -> Result<(), BrowserError>;

    /// Number of elements matching the locator.
    fn count(&self, locator: &Locator) -> Result<usize, BrowserError>;
}
