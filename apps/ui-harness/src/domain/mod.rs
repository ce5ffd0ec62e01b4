//! Domain layer for the UI harness.
//!
//! Pure value objects and services with no browser or I/O dependencies.
//!
//! - `order_entry`: order types, sides, expiry choices, the confirmation-text
//!   rule and test-data generation for order tickets.

pub mod order_entry;
