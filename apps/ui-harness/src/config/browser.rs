//! Browser launch settings.

use serde::{Deserialize, Serialize};

/// Browser engine to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    /// Chromium (default, also used for unknown names).
    #[default]
    Chromium,
    /// Firefox.
    Firefox,
    /// WebKit.
    Webkit,
}

impl BrowserKind {
    /// Resolve a browser name; unknown names launch Chromium.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "firefox" => Self::Firefox,
            "webkit" => Self::Webkit,
            _ => Self::Chromium,
        }
    }
}

/// Browser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Engine to launch.
    #[serde(default)]
    pub kind: BrowserKind,
    /// Run without a visible window.
    #[serde(default)]
    pub headless: bool,
    /// Delay inserted between driver actions, in milliseconds.
    #[serde(default)]
    pub slow_mo_ms: u64,
    /// Viewport width in pixels.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    /// Viewport height in pixels.
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
    /// Browser locale.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Browser timezone id.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            kind: BrowserKind::default(),
            headless: false,
            slow_mo_ms: 0,
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            locale: default_locale(),
            timezone: default_timezone(),
        }
    }
}

const fn default_viewport_width() -> u32 {
    1920
}

const fn default_viewport_height() -> u32 {
    1080
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_timezone() -> String {
    "Asia/Singapore".to_string()
}
