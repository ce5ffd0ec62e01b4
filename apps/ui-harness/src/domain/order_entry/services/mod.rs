//! Order Entry Domain Services

mod order_data;
mod price_calculator;

pub use order_data::OrderDataGenerator;
pub use price_calculator::{PriceCalculator, parse_displayed_price};
