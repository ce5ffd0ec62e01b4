//! Observability for harness runs.
//!
//! Provides the explicit [`LoggingContext`] that owns the console and run-log
//! layers for the lifetime of a test session.

mod logging;

pub use logging::{LoggingContext, LoggingError, log_file_name};
