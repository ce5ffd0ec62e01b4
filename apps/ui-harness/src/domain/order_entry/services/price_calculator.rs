//! Price arithmetic and parsing of prices rendered by the trading page.

use std::str::FromStr;
use std::sync::OnceLock;

use rust_decimal::Decimal;

/// Decimal places the platform quotes prices with.
pub const PRICE_DP: u32 = 5;

/// Decimal places for percentage figures.
pub const PERCENT_DP: u32 = 2;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Percentage helpers used when deriving order prices from the live quote.
pub struct PriceCalculator;

impl PriceCalculator {
    /// Price after applying a signed percentage change, rounded to 5 dp.
    #[must_use]
    pub fn percentage_change(original: Decimal, percentage: Decimal) -> Decimal {
        (original * (Decimal::ONE + percentage / ONE_HUNDRED)).round_dp(PRICE_DP)
    }

    /// Percentage move from `from` to `to`, rounded to 2 dp.
    ///
    /// Returns `None` when `from` is zero.
    #[must_use]
    pub fn percentage_diff(from: Decimal, to: Decimal) -> Option<Decimal> {
        if from.is_zero() {
            return None;
        }
        Some((((to - from) / from) * ONE_HUNDRED).round_dp(PERCENT_DP))
    }
}

/// Extract the numeric price from text such as `"1.23456"` or `"Buy 1.2345"`.
///
/// Returns `None` for the `--` placeholder shown while quotes load.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
pub fn parse_displayed_price(text: &str) -> Option<Decimal> {
    static PRICE_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re =
        PRICE_REGEX.get_or_init(|| regex::Regex::new(r"[\d.]+").expect("price regex is valid"));

    let matched = re.find(text)?;
    Decimal::from_str(matched.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percentage_change_up_and_down() {
        assert_eq!(PriceCalculator::percentage_change(dec!(100), dec!(5)), dec!(105));
        assert_eq!(PriceCalculator::percentage_change(dec!(100), dec!(-5)), dec!(95));
        assert_eq!(
            PriceCalculator::percentage_change(dec!(1.23456), dec!(1)),
            dec!(1.24691)
        );
    }

    #[test]
    fn percentage_diff() {
        assert_eq!(
            PriceCalculator::percentage_diff(dec!(100), dec!(105)),
            Some(dec!(5))
        );
        assert_eq!(
            PriceCalculator::percentage_diff(dec!(3), dec!(2)),
            Some(dec!(-33.33))
        );
        assert_eq!(PriceCalculator::percentage_diff(Decimal::ZERO, dec!(1)), None);
    }

    #[test]
    fn parse_plain_price() {
        assert_eq!(parse_displayed_price("1.23456"), Some(dec!(1.23456)));
        assert_eq!(parse_displayed_price("2650"), Some(dec!(2650)));
    }

    #[test]
    fn parse_price_with_surrounding_text() {
        assert_eq!(parse_displayed_price("Sell 0.98765 USD"), Some(dec!(0.98765)));
    }

    #[test]
    fn parse_placeholder_is_none() {
        assert_eq!(parse_displayed_price("--"), None);
        assert_eq!(parse_displayed_price(""), None);
        assert_eq!(parse_displayed_price("."), None);
    }
}
