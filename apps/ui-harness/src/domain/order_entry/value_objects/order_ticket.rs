//! Order ticket test data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ExpiryType, OrderType};

/// Values a test types into the order ticket before pressing the order button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicket {
    /// Order type selected in the dropdown.
    pub order_type: OrderType,
    /// Entry price for pending orders; `None` for market orders.
    pub price: Option<Decimal>,
    /// Volume in lots.
    pub volume: Decimal,
    /// Stop loss price.
    pub stop_loss: Decimal,
    /// Take profit price.
    pub take_profit: Decimal,
    /// Expiry for pending orders; `None` for market orders.
    pub expiry: Option<ExpiryType>,
    /// Expiry date, set only for date-based expiries.
    pub expiry_date: Option<DateTime<Utc>>,
    /// When the ticket was generated, used to find the order in history.
    pub created_at: DateTime<Utc>,
}

impl OrderTicket {
    /// Returns true if the expiry date picker has to be filled in.
    #[must_use]
    pub fn needs_expiry_date(&self) -> bool {
        self.expiry.is_some_and(|expiry| expiry.requires_date())
    }
}
