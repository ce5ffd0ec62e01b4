//! Application Services
//!
//! Browser-backed waits and the confirmation-dialog check, built on the
//! [`wait`](crate::wait) primitives and the [`BrowserPort`](super::ports::BrowserPort).

mod confirmation_dialog;
mod element_waits;
mod error;

pub use confirmation_dialog::{ConfirmationDialog, ConfirmationLocators};
pub use element_waits::ElementWaits;
pub use error::ServiceError;
