//! Ports (Interfaces)
//!
//! The browser-automation driver sits behind [`BrowserPort`]; the harness
//! never talks to a concrete driver directly.

mod browser_port;

pub use browser_port::{BrowserError, BrowserErrorKind, BrowserPort, Locator};

#[cfg(test)]
pub use browser_port::MockBrowserPort;
