//! Expiry choices for pending (limit/stop) orders.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::order_entry::errors::OrderEntryError;

/// Expiry options offered by the expiry dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryType {
    /// Stays open until canceled.
    #[default]
    GoodTillCanceled,
    /// Expires at the end of the trading day.
    GoodTillDay,
    /// Expires on a chosen date.
    GoodTillSpecifiedDate,
    /// Expires at a chosen date and time.
    GoodTillSpecifiedDateAndTime,
}

impl ExpiryType {
    /// Every expiry option, in dropdown order.
    pub const ALL: [Self; 4] = [
        Self::GoodTillCanceled,
        Self::GoodTillDay,
        Self::GoodTillSpecifiedDate,
        Self::GoodTillSpecifiedDateAndTime,
    ];

    /// Canonical label rendered by the UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GoodTillCanceled => "Good Till Canceled",
            Self::GoodTillDay => "Good Till Day",
            Self::GoodTillSpecifiedDate => "Good Till Specified Date",
            Self::GoodTillSpecifiedDateAndTime => "Good Till Specified Date and Time",
        }
    }

    /// Resolve a label exactly as the UI renders it.
    pub fn from_label(label: &str) -> Result<Self, OrderEntryError> {
        Self::ALL
            .into_iter()
            .find(|expiry| expiry.label() == label)
            .ok_or_else(|| OrderEntryError::UnknownExpiryType(label.to_string()))
    }

    /// Date-based expiries need the date picker filled in.
    #[must_use]
    pub fn requires_date(&self) -> bool {
        self.label().contains("Date")
    }

    /// Only the date-and-time expiry opens the time picker.
    #[must_use]
    pub const fn requires_time(&self) -> bool {
        matches!(self, Self::GoodTillSpecifiedDateAndTime)
    }
}

impl fmt::Display for ExpiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
