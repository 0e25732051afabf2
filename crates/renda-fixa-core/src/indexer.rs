//! Rate indexing: converts quoted annual rates into per-day compound growth
//! multipliers for each instrument class.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::types::Percent;

/// Annual SELIC above this threshold pays 70% of SELIC; at or below it the
/// savings account pays the fixed monthly floor instead.
const SAVINGS_SELIC_THRESHOLD: Decimal = dec!(8.5);

/// Fixed savings floor: 0.5% per month. The referential-rate (TR) component
/// is intentionally omitted in this branch.
const SAVINGS_MONTHLY_FLOOR: Decimal = dec!(0.005);

/// Daily growth multiplier for the savings account.
///
/// Above the 8.5% a.a. threshold the account pays 70% of the monthly SELIC
/// rate; otherwise it pays a flat 0.5% per month. Either way the monthly
/// rate is spread over a 30-day month.
pub fn savings_daily_index(annual_selic_rate: Percent) -> Decimal {
    let one_thirtieth = Decimal::ONE / dec!(30);
    if annual_selic_rate > SAVINGS_SELIC_THRESHOLD {
        let monthly_selic = annual_selic_rate / dec!(100) / dec!(12);
        (monthly_selic * dec!(0.7) + Decimal::ONE).powd(one_thirtieth)
    } else {
        (SAVINGS_MONTHLY_FLOOR + Decimal::ONE).powd(one_thirtieth)
    }
}

/// Daily growth multiplier for a CDI-indexed note quoted as a percentage of
/// the annual DI rate. Identical for taxable and exempt notes; only the
/// post-accrual taxation differs.
pub fn cdi_daily_index(rate_pct_of_di: Percent, annual_di_rate: Percent) -> Decimal {
    let fraction_of_di = rate_pct_of_di / dec!(100);
    let annual = fraction_of_di * annual_di_rate / dec!(100);
    (annual + Decimal::ONE).powd(Decimal::ONE / dec!(365))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdi_index_at_100_pct_di() {
        // 100% of 12.65% a.a. => (1.1265)^(1/365)
        let idx = cdi_daily_index(dec!(100), dec!(12.65));
        // Compounded over a full year the index must recover the annual rate
        let annual = idx.powd(dec!(365)) - Decimal::ONE;
        assert!(
            (annual - dec!(0.1265)).abs() < dec!(0.0001),
            "expected ~12.65% a.a., got {}",
            annual
        );
    }

    #[test]
    fn test_cdi_index_scales_with_pct_of_di() {
        let full = cdi_daily_index(dec!(100), dec!(10));
        let half = cdi_daily_index(dec!(50), dec!(10));
        assert!(full > half);
        let half_annual = half.powd(dec!(365)) - Decimal::ONE;
        assert!((half_annual - dec!(0.05)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_savings_above_threshold_pays_70_pct_of_selic() {
        let idx = savings_daily_index(dec!(12));
        // monthly = 0.12/12 = 0.01, 70% => 1.007^(1/30)
        let monthly = idx.powd(dec!(30)) - Decimal::ONE;
        assert!(
            (monthly - dec!(0.007)).abs() < dec!(0.00001),
            "expected ~0.7% monthly, got {}",
            monthly
        );
    }

    #[test]
    fn test_savings_at_or_below_threshold_pays_fixed_floor() {
        let at = savings_daily_index(dec!(8.5));
        let below = savings_daily_index(dec!(3));
        assert_eq!(at, below);
        let monthly = at.powd(dec!(30)) - Decimal::ONE;
        assert!((monthly - dec!(0.005)).abs() < dec!(0.00001));
    }

    #[test]
    fn test_savings_threshold_is_exclusive() {
        // 8.5 exactly takes the floor branch; just above it does not
        let floor = savings_daily_index(dec!(8.5));
        let above = savings_daily_index(dec!(8.51));
        assert_ne!(floor, above);
    }
}
