//! Order entry errors.

use thiserror::Error;

/// Errors raised when resolving order-entry labels typed by a test author.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderEntryError {
    /// The order type name matched no canonical label.
    #[error("no such order type: {0}")]
    UnknownOrderType(String),

    /// The order side name matched neither BUY nor SELL.
    #[error("no such order side: {0}")]
    UnknownOrderSide(String),

    /// The expiry name matched no canonical expiry label.
    #[error("no such expiry type: {0}")]
    UnknownExpiryType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_rejected_input() {
        assert_eq!(
            OrderEntryError::UnknownOrderType("Bracket".to_string()).to_string(),
            "no such order type: Bracket"
        );
        assert_eq!(
            OrderEntryError::UnknownOrderSide("HOLD".to_string()).to_string(),
            "no such order side: HOLD"
        );
    }
}
