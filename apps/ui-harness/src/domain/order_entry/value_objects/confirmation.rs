//! Expected confirmation-dialog text.
//!
//! Market orders only show the side (`BUY`, `SELL`); every other type shows
//! the side followed by the upper-cased type label (`SELL LIMIT`,
//! `BUY STOP LIMIT`).

use super::{OrderSide, OrderType};
use crate::domain::order_entry::errors::OrderEntryError;

/// Text the confirmation dialog renders for an order type and side.
#[must_use]
pub fn confirmation_text(order_type: OrderType, order_side: OrderSide) -> String {
    if order_type.is_market() {
        return order_side.as_str().to_string();
    }

    format!("{} {}", order_side, order_type.label().to_uppercase())
}

/// Same as [`confirmation_text`], from the names a test author typed.
///
/// The type must be a canonical label (`"Stop Limit"`), the side is matched
/// ignoring case. The type is resolved first.
pub fn confirmation_text_by_name(
    order_type_name: &str,
    order_side_name: &str,
) -> Result<String, OrderEntryError> {
    let order_type = OrderType::from_label(order_type_name)?;
    let order_side = OrderSide::from_name(order_side_name)?;
    Ok(confirmation_text(order_type, order_side))
}
