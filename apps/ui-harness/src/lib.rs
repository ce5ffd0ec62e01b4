// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! UI Harness - Rust Core Library
//!
//! Building blocks for UI test automation of a web trading platform.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure order-entry rules
//!   - `order_entry`: order type/side/expiry labels, the confirmation-text
//!     rule, price helpers and test-data generation
//!
//! - **Application**: Ports and services
//!   - `ports`: `BrowserPort`, the capability interface over a browser driver
//!   - `services`: `ElementWaits`, `ConfirmationDialog`
//!
//! - **Infrastructure**: Adapters
//!   - `browser`: `ScriptedBrowser`, an in-memory driver
//!
//! ## Cross-cutting
//!
//! - `wait`: blocking poll-until waits and retry helpers
//! - `config`: layered configuration per environment
//! - `observability`: console and per-run file logging
//! - `error`: crate-level error classification

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Order-entry rules with no I/O.
pub mod domain;

/// Application layer - Browser port and services.
pub mod application;

/// Infrastructure layer - Port adapters.
pub mod infrastructure;

// =============================================================================
// Cross-cutting Modules
// =============================================================================

/// Poll-until waits and retry helpers.
pub mod wait;

/// Configuration loading and validation.
pub mod config;

/// Logging setup.
pub mod observability;

/// Crate-level errors.
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::order_entry::{
    ExpiryType, OrderSide, OrderType, confirmation_text, confirmation_text_by_name,
};
pub use error::{ErrorCode, HarnessError};
pub use wait::{PollPolicy, RetryPolicy, WaitError};
