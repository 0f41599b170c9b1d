//! Currency rounding shared by the deduction calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to cents using half-up rounding.
///
/// Values at exactly half a cent round away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(round_half_up(dec("15165.2625")), dec("15165.26"));
/// assert_eq!(round_half_up(dec("123.455")), dec("123.46"));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec("123.454")), dec("123.45"));
    }

    #[test]
    fn test_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec("123.455")), dec("123.46"));
    }

    #[test]
    fn test_recurring_monthly_fraction() {
        // 30783.15 / 12
        let monthly = dec("30783.15") / Decimal::from(12);
        assert_eq!(round_half_up(monthly), dec("2565.26"));
    }

    #[test]
    fn test_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec("1080.00")), dec("1080.00"));
        assert_eq!(round_half_up(dec("0")), dec("0"));
    }
}
