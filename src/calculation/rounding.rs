//! The shared monetary rounding policy.
//!
//! Payroll figures must be reproducible to the cent across a run, so
//! rounding happens exactly once per output value: half-up to 2 decimal
//! places, applied at result construction. Intermediate sums are carried
//! at full precision.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount half-up to 2 decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use statutory_engine::calculation::round_money;
/// use std::str::FromStr;
///
/// let d = Decimal::from_str("123.455").unwrap();
/// assert_eq!(round_money(d), Decimal::from_str("123.46").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so equal amounts serialize identically ("420.00", never "420").
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(round_money(dec("0.005")), dec("0.01"));
        assert_eq!(round_money(dec("2.125")), dec("2.13"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_money(dec("2.124")), dec("2.12"));
    }

    #[test]
    fn test_exact_values_unchanged() {
        assert_eq!(round_money(dec("420.00")), dec("420.00"));
        assert_eq!(round_money(dec("0")), dec("0"));
    }

    #[test]
    fn test_scale_is_pinned_to_two() {
        assert_eq!(round_money(dec("100")).to_string(), "100.00");
        assert_eq!(round_money(dec("1375")).to_string(), "1375.00");
    }
}
