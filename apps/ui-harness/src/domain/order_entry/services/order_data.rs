//! Order ticket generation for UI tests.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use super::price_calculator::{PRICE_DP, PriceCalculator};
use crate::domain::order_entry::value_objects::{ExpiryType, OrderTicket, OrderType};

/// Default volume for generated tickets.
pub const DEFAULT_VOLUME: Decimal = dec!(0.1);

/// Default stop-loss / take-profit distance in percent.
pub const DEFAULT_PROTECTION_PCT: Decimal = dec!(5);

/// Distance of pending order prices from the market, in percent.
const PENDING_OFFSET_PCT: Decimal = dec!(1);

/// Days ahead for date-based expiries.
const DEFAULT_EXPIRY_DAYS: i64 = 7;

/// Generates order tickets anchored on the live price of the instrument.
#[derive(Debug)]
pub struct OrderDataGenerator {
    rng: StdRng,
}

impl Default for OrderDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDataGenerator {
    /// Create a generator seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random volume in `[min, max]` with two decimal places.
    ///
    /// When no two-decimal value lies in the range, `max` is returned as is.
    pub fn generate_volume(&mut self, min: Decimal, max: Decimal) -> Decimal {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let lo = (min * Decimal::ONE_HUNDRED).ceil().to_i64().unwrap_or(1);
        let hi = (max * Decimal::ONE_HUNDRED).floor().to_i64().unwrap_or(lo);
        if hi < lo {
            return max;
        }
        if hi == lo {
            return Decimal::new(lo, 2);
        }
        Decimal::new(self.rng.random_range(lo..=hi), 2)
    }

    /// Stop loss `percentage` below the price.
    #[must_use]
    pub fn stop_loss(price: Decimal, percentage: Decimal) -> Decimal {
        PriceCalculator::percentage_change(price, -percentage)
    }

    /// Take profit `percentage` above the price.
    #[must_use]
    pub fn take_profit(price: Decimal, percentage: Decimal) -> Decimal {
        PriceCalculator::percentage_change(price, percentage)
    }

    /// Limit price 1% below (buy) or above (sell) the market.
    #[must_use]
    pub fn limit_price(price: Decimal, below_market: bool) -> Decimal {
        Self::offset_from_market(price, below_market)
    }

    /// Stop price 1% above (buy) or below (sell) the market.
    #[must_use]
    pub fn stop_price(price: Decimal, above_market: bool) -> Decimal {
        Self::offset_from_market(price, !above_market)
    }

    fn offset_from_market(price: Decimal, below: bool) -> Decimal {
        let factor = if below {
            Decimal::ONE - PENDING_OFFSET_PCT / Decimal::ONE_HUNDRED
        } else {
            Decimal::ONE + PENDING_OFFSET_PCT / Decimal::ONE_HUNDRED
        };
        (price * factor).round_dp(PRICE_DP)
    }

    /// A point in time `days_ahead` days from now.
    #[must_use]
    pub fn future_date(days_ahead: i64) -> DateTime<Utc> {
        Utc::now() + Duration::days(days_ahead)
    }

    /// Market ticket with protection around the current price.
    #[must_use]
    pub fn market_order(current_price: Decimal) -> OrderTicket {
        OrderTicket {
            order_type: OrderType::Market,
            price: None,
            volume: DEFAULT_VOLUME,
            stop_loss: Self::stop_loss(current_price, DEFAULT_PROTECTION_PCT),
            take_profit: Self::take_profit(current_price, DEFAULT_PROTECTION_PCT),
            expiry: None,
            expiry_date: None,
            created_at: Utc::now(),
        }
    }

    /// Buy limit ticket below the market; protection is derived from the limit price.
    #[must_use]
    pub fn limit_order(current_price: Decimal, expiry: ExpiryType) -> OrderTicket {
        Self::pending_order(
            OrderType::Limit,
            Self::limit_price(current_price, true),
            expiry,
        )
    }

    /// Buy stop ticket above the market; protection is derived from the stop price.
    #[must_use]
    pub fn stop_order(current_price: Decimal, expiry: ExpiryType) -> OrderTicket {
        Self::pending_order(
            OrderType::Stop,
            Self::stop_price(current_price, true),
            expiry,
        )
    }

    fn pending_order(order_type: OrderType, price: Decimal, expiry: ExpiryType) -> OrderTicket {
        OrderTicket {
            order_type,
            price: Some(price),
            volume: DEFAULT_VOLUME,
            stop_loss: Self::stop_loss(price, DEFAULT_PROTECTION_PCT),
            take_profit: Self::take_profit(price, DEFAULT_PROTECTION_PCT),
            expiry: Some(expiry),
            expiry_date: expiry
                .requires_date()
                .then(|| Self::future_date(DEFAULT_EXPIRY_DAYS)),
            created_at: Utc::now(),
        }
    }
}
