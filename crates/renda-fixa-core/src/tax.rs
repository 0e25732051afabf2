//! Taxation lookup tables: the regressive income-tax bracket by holding
//! period and the 30-day IOF early-redemption table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

/// Regressive IOF schedule, percentage of gross interest withheld when
/// redeeming on day N (index = N - 1). Zero from day 30 onwards.
const IOF_TABLE: [u32; 30] = [
    96, 93, 90, 86, 83, 80, 76, 73, 70, 66, 63, 60, 56, 53, 50, 46, 43, 40, 36, 33, 30, 26, 23,
    20, 16, 13, 10, 6, 3, 0,
];

/// Regressive income-tax bracket for a taxable note held `total_days`,
/// in percentage points.
pub fn income_tax_rate(total_days: u32) -> Percent {
    if total_days <= 180 {
        dec!(22.5)
    } else if total_days <= 360 {
        dec!(20.0)
    } else if total_days <= 720 {
        dec!(17.5)
    } else {
        dec!(15.0)
    }
}

/// IOF percentage charged on gross interest when redeeming after
/// `days_held` days. Only the first 30 days attract IOF.
pub fn iof_rate(days_held: u32) -> Percent {
    if days_held > 30 {
        return Decimal::ZERO;
    }
    // A zero-day holding period cannot reach redemption; validated upstream.
    debug_assert!(days_held >= 1, "days_held must be at least 1");
    let index = days_held.saturating_sub(1) as usize;
    Decimal::from(IOF_TABLE[index])
}

/// IOF amount withheld from `gross_interest` at redemption.
pub fn iof_amount(days_held: u32, gross_interest: Money) -> Money {
    gross_interest * iof_rate(days_held) / dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_tax_bracket_boundaries() {
        assert_eq!(income_tax_rate(1), dec!(22.5));
        assert_eq!(income_tax_rate(180), dec!(22.5));
        assert_eq!(income_tax_rate(181), dec!(20.0));
        assert_eq!(income_tax_rate(360), dec!(20.0));
        assert_eq!(income_tax_rate(361), dec!(17.5));
        assert_eq!(income_tax_rate(720), dec!(17.5));
        assert_eq!(income_tax_rate(721), dec!(15.0));
        assert_eq!(income_tax_rate(3650), dec!(15.0));
    }

    #[test]
    fn test_iof_table_boundaries() {
        assert_eq!(iof_rate(1), dec!(96));
        assert_eq!(iof_rate(2), dec!(93));
        assert_eq!(iof_rate(15), dec!(50));
        assert_eq!(iof_rate(29), dec!(3));
        assert_eq!(iof_rate(30), Decimal::ZERO);
        assert_eq!(iof_rate(31), Decimal::ZERO);
        assert_eq!(iof_rate(360), Decimal::ZERO);
    }

    #[test]
    fn test_iof_amount_applies_to_gross_interest() {
        // Day 1: 96% of the interest, not of the principal
        assert_eq!(iof_amount(1, dec!(100)), dec!(96));
        assert_eq!(iof_amount(21, dec!(200)), dec!(60));
        assert_eq!(iof_amount(90, dec!(500)), Decimal::ZERO);
    }
}
