//! Order Entry Bounded Context
//!
//! Everything a UI test needs to know about the order ticket of the trading
//! platform without touching the browser.
//!
//! # Key Concepts
//!
//! - **Confirmation Text**: the exact string the confirmation dialog renders
//!   for an (order type, side) pair
//! - **Canonical Labels**: the labels the order-type and expiry dropdowns show
//! - **Order Tickets**: generated prices/volumes for placing test orders

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::OrderEntryError;
pub use services::{OrderDataGenerator, PriceCalculator, parse_displayed_price};
pub use value_objects::{
    ExpiryType, OrderSide, OrderTicket, OrderType, confirmation_text, confirmation_text_by_name,
};
