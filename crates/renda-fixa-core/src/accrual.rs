//! Compound accrual over elapsed days.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::types::Money;

const DAYS_IN_MONTH: u32 = 30;

/// Gross interest from compounding `principal` at `daily_index` over
/// `elapsed_days`. Intermediate exponentiation is carried at full Decimal
/// precision; the result is rounded to the currency minor unit exactly once
/// here.
pub fn compound(principal: Money, daily_index: Decimal, elapsed_days: u32) -> Money {
    let interest = principal * (daily_index.powd(Decimal::from(elapsed_days)) - Decimal::ONE);
    interest.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Floor a holding period to whole 30-day months. Savings accounts accrue
/// nothing for the days of an incomplete month.
pub fn full_period_days(days: u32) -> u32 {
    if days < DAYS_IN_MONTH {
        0
    } else {
        (days / DAYS_IN_MONTH) * DAYS_IN_MONTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_days_accrues_zero() {
        assert_eq!(compound(dec!(10000), dec!(1.0003), 0), Decimal::ZERO);
        assert_eq!(compound(dec!(1), dec!(2), 0), Decimal::ZERO);
    }

    #[test]
    fn test_unit_index_accrues_zero() {
        assert_eq!(compound(dec!(5000), Decimal::ONE, 365), Decimal::ZERO);
    }

    #[test]
    fn test_compound_rounds_to_two_decimals() {
        // 1000 * (1.001^10 - 1) = 10.0451... => 10.05
        let interest = compound(dec!(1000), dec!(1.001), 10);
        assert_eq!(interest, dec!(10.05));
    }

    #[test]
    fn test_full_period_days_floors_to_month_multiples() {
        assert_eq!(full_period_days(0), 0);
        assert_eq!(full_period_days(15), 0);
        assert_eq!(full_period_days(29), 0);
        assert_eq!(full_period_days(30), 30);
        assert_eq!(full_period_days(59), 30);
        assert_eq!(full_period_days(60), 60);
        assert_eq!(full_period_days(365), 360);
    }
}
