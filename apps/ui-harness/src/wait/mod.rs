//! Poll-until waits and retry helpers.
//!
//! Blocking, fixed-interval primitives for UI tests: evaluate a condition or
//! extract a value until it is acceptable or the timeout elapses, and retry
//! operations that fail with a retryable error kind.
//!
//! These helpers never log and never swallow errors; callers decide what to
//! report. Compose [`retry`] around a `poll_for_*` call when a whole wait cycle
//! should be repeated.
//!
//! # Example
//!
//! ```rust,ignore
//! use ui_harness::wait::{PollPolicy, poll_for_non_empty};
//!
//! let policy = PollPolicy::from_millis(5_000, 100);
//! let value = poll_for_non_empty(|| read_volume_field(), &policy)?;
//! ```

mod error;
mod poll;
mod policy;
mod retry;

pub use error::WaitError;
pub use poll::{
    poll_for_condition, poll_for_count, poll_for_non_empty, poll_for_numeric, poll_for_value,
    try_poll_for_condition, try_poll_for_value,
};
pub(crate) use poll::parse_number;
pub use policy::PollPolicy;
pub use retry::{ErrorKind, RetryPolicy, retry, retry_if};
