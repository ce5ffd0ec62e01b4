//! Locations of run artifacts (reports, screenshots, logs, traces).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Artifact directories and capture switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory the other paths are relative to.
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
    /// Test reports.
    #[serde(default = "default_reports")]
    pub reports: PathBuf,
    /// Failure screenshots.
    #[serde(default = "default_screenshots")]
    pub screenshots: PathBuf,
    /// Run logs.
    #[serde(default = "default_logs")]
    pub logs: PathBuf,
    /// Driver traces.
    #[serde(default = "default_traces")]
    pub traces: PathBuf,
    /// Capture a screenshot when a test fails.
    #[serde(default = "default_true")]
    pub screenshot_on_failure: bool,
    /// Keep the driver trace when a test fails.
    #[serde(default = "default_true")]
    pub trace_on_failure: bool,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            reports: default_reports(),
            screenshots: default_screenshots(),
            logs: default_logs(),
            traces: default_traces(),
            screenshot_on_failure: true,
            trace_on_failure: true,
        }
    }
}

impl ArtifactsConfig {
    /// Same layout under a different root.
    #[must_use]
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root.into(),
            ..Self::default()
        }
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        self.root_dir.join(dir)
    }

    /// Reports directory.
    #[must_use]
    pub fn reports_dir(&self) -> PathBuf {
        self.resolve(&self.reports)
    }

    /// Screenshots directory.
    #[must_use]
    pub fn screenshots_dir(&self) -> PathBuf {
        self.resolve(&self.screenshots)
    }

    /// Logs directory.
    #[must_use]
    pub fn logs_dir(&self) -> PathBuf {
        self.resolve(&self.logs)
    }

    /// Traces directory.
    #[must_use]
    pub fn traces_dir(&self) -> PathBuf {
        self.resolve(&self.traces)
    }

    /// Path for a named screenshot.
    #[must_use]
    pub fn screenshot_path(&self, name: &str) -> PathBuf {
        self.screenshots_dir().join(format!("{name}.png"))
    }

    /// Create every artifact directory (existing ones are kept).
    pub fn create_directories(&self) -> std::io::Result<()> {
        for dir in [
            self.reports_dir(),
            self.screenshots_dir(),
            self.logs_dir(),
            self.traces_dir(),
        ] {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(())
    }
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_reports() -> PathBuf {
    PathBuf::from("reports")
}

fn default_screenshots() -> PathBuf {
    PathBuf::from("screenshots")
}

fn default_logs() -> PathBuf {
    PathBuf::from("logs")
}

fn default_traces() -> PathBuf {
    PathBuf::from("traces")
}

const fn default_true() -> bool {
    true
}
