//! Order type (market, limit, etc.).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::order_entry::errors::OrderEntryError;

/// Order type as offered by the order-type dropdown of the trading page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - execute at best available price.
    Market,
    /// Limit order - execute at specified price or better.
    Limit,
    /// Stop order - becomes market order when stop price is reached.
    Stop,
    /// Stop-limit order - becomes limit order when stop price is reached.
    StopLimit,
}

impl OrderType {
    /// Every order type, in dropdown order.
    pub const ALL: [Self; 4] = [Self::Market, Self::Limit, Self::Stop, Self::StopLimit];

    /// Canonical label rendered by the UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Limit => "Limit",
            Self::Stop => "Stop",
            Self::StopLimit => "Stop Limit",
        }
    }

    /// Resolve a label exactly as the UI renders it (case-sensitive).
    pub fn from_label(label: &str) -> Result<Self, OrderEntryError> {
        Self::ALL
            .into_iter()
            .find(|order_type| order_type.label() == label)
            .ok_or_else(|| OrderEntryError::UnknownOrderType(label.to_string()))
    }

    /// Returns true if this is a market order (immediate execution).
    #[must_use]
    pub const fn is_market(&self) -> bool {
        matches!(self, Self::Market)
    }

    /// Returns true if the ticket needs a price field filled in.
    #[must_use]
    pub const fn requires_price(&self) -> bool {
        !self.is_market()
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderType {
    type Err = OrderEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
