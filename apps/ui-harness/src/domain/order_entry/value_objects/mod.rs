//! Order Entry Value Objects
//!
//! Immutable types for the order ticket.

mod confirmation;
mod expiry_type;
mod order_side;
mod order_ticket;
mod order_type;

pub use confirmation::{confirmation_text, confirmation_text_by_name};
pub use expiry_type::ExpiryType;
pub use order_side::OrderSide;
pub use order_ticket::OrderTicket;
pub use order_type::OrderType;
