//! Console and per-run file logging.
//!
//! # Example
//!
//! ```rust,ignore
//! use ui_harness::observability::LoggingContext;
//!
//! let logging = LoggingContext::init(&config.logging, &config.artifacts)?;
//! tracing::info!("session started");
//! logging.shutdown();
//! ```

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::{ArtifactsConfig, LoggingConfig};

/// Errors raised while installing the logging layers.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A level or filter directive could not be parsed.
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// The run log could not be created.
    #[error("Failed to create log file '{}': {source}", path.display())]
    CreateFile {
        /// Target path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// File name of the run log started at `started_at`.
#[must_use]
pub fn log_file_name(started_at: NaiveDateTime) -> String {
    format!("test_run_{}.log", started_at.format("%Y%m%d_%H%M%S"))
}

/// Installed logging layers for one process.
///
/// Dropping the context flushes the run log; [`LoggingContext::shutdown`]
/// does the same at an explicit point.
pub struct LoggingContext {
    log_file: Option<PathBuf>,
    guard: Option<WorkerGuard>,
}

impl LoggingContext {
    /// Install the console layer and, when enabled, the run-log file layer.
    ///
    /// The console layer filters at `logging.level`; the file layer at
    /// `logging.file_level`, writing under `artifacts.logs_dir()`.
    ///
    /// An existing run log is appended to, never truncated.
    pub fn init(
        logging: &LoggingConfig,
        artifacts: &ArtifactsConfig,
    ) -> Result<Self, LoggingError> {
        let console = fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(parse_filter(&logging.level)?);

        let (file_layer, guard, log_file) = if logging.file_enabled {
            let path = artifacts
                .logs_dir()
                .join(log_file_name(Local::now().naive_local()));
            let file = create_log_file(&path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(parse_filter(&logging.file_level)?);
            (Some(layer), Some(guard), Some(path))
        } else {
            (None, None, None)
        };

        tracing_subscriber::registry()
            .with(console)
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

        if let Some(path) = &log_file {
            tracing::debug!(path = %path.display(), "Run log opened");
        }

        Ok(Self { log_file, guard })
    }

    /// Path of the run log, if file logging is enabled.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Flush and close the run log.
    pub fn shutdown(mut self) {
        self.flush();
    }

    fn flush(&mut self) {
        if let Some(guard) = self.guard.take() {
            tracing::debug!("Closing run log");
            drop(guard);
        }
    }
}

impl Drop for LoggingContext {
    fn drop(&mut self) {
        self.flush();
    }
}

impl std::fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingContext")
            .field("log_file", &self.log_file)
            .field("open", &self.guard.is_some())
            .finish()
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

fn create_log_file(path: &Path) -> Result<File, LoggingError> {
    let wrap = |source: std::io::Error| LoggingError::CreateFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(wrap)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_log_file_name_format() {
        let started = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 3)
            .unwrap();
        assert_eq!(log_file_name(started), "test_run_20240305_090703.log");
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let err = parse_filter("ui_harness=loud").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter { .. }));
    }

    #[test]
    fn test_create_log_file_makes_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/logs/run.log");
        create_log_file(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_reopening_log_file_keeps_contents() {
        use std::io::Write;

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("test_run_20240305_090703.log");
        create_log_file(&path)
            .unwrap()
            .write_all(b"first session\n")
            .unwrap();
        create_log_file(&path)
            .unwrap()
            .write_all(b"second session\n")
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first session\nsecond session\n");
    }
}
