//! Gross-up: rate equivalence between taxable and tax-exempt CDI notes at a
//! given holding period's income-tax bracket.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::RendaFixaError;
use crate::tax;
use crate::types::{with_metadata, ComputationOutput, Percent};
use crate::RendaFixaResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrossUpInput {
    /// Rate to convert, as % of DI
    pub rate_pct_di: Percent,
    /// Holding period in days; selects the income-tax bracket
    pub term_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrossUpOutput {
    /// Exempt rate netting the same as `rate_pct_di` held taxable
    pub exempt_equivalent: Percent,
    /// Taxable rate netting the same as `rate_pct_di` held exempt
    pub taxable_equivalent: Percent,
    /// Income-tax bracket used for both conversions, % points
    pub tax_rate: Percent,
}

/// Tax-exempt rate (% DI) that nets the same return as a taxable note at
/// `taxable_rate_pct_di` over `total_days`.
pub fn exempt_equivalent_of(taxable_rate_pct_di: Percent, total_days: u32) -> Percent {
    let tax_rate = tax::income_tax_rate(total_days);
    taxable_rate_pct_di * (Decimal::ONE - tax_rate / dec!(100))
}

/// Taxable rate (% DI) needed to match a tax-exempt note at
/// `exempt_rate_pct_di` over `total_days`. Guards the retained-fraction
/// denominator even though the fixed bracket table never drives it to zero.
pub fn taxable_equivalent_of(
    exempt_rate_pct_di: Percent,
    total_days: u32,
) -> RendaFixaResult<Percent> {
    let tax_rate = tax::income_tax_rate(total_days);
    let retained = Decimal::ONE - tax_rate / dec!(100);
    if retained <= Decimal::ZERO {
        return Err(RendaFixaError::DivisionByZero {
            context: "gross-up retained fraction (1 - tax rate)".into(),
        });
    }
    Ok(exempt_rate_pct_di / retained)
}

/// Compute both directions of the equivalence for one quoted rate.
pub fn gross_up(input: &GrossUpInput) -> RendaFixaResult<ComputationOutput<GrossUpOutput>> {
    let start = Instant::now();

    if input.rate_pct_di < Decimal::ZERO {
        return Err(RendaFixaError::InvalidInput {
            field: "rate_pct_di".into(),
            reason: "Rate cannot be negative".into(),
        });
    }
    if input.term_days == 0 {
        return Err(RendaFixaError::InvalidInput {
            field: "term_days".into(),
            reason: "Term must be at least 1 day".into(),
        });
    }

    let output = GrossUpOutput {
        exempt_equivalent: exempt_equivalent_of(input.rate_pct_di, input.term_days),
        taxable_equivalent: taxable_equivalent_of(input.rate_pct_di, input.term_days)?,
        tax_rate: tax::income_tax_rate(input.term_days),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Gross-up equivalence at the holding period's IR bracket",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exempt_equivalent_discounts_by_bracket() {
        // 360 days => 20% bracket: 100% DI taxable nets like 80% DI exempt
        assert_eq!(exempt_equivalent_of(dec!(100), 360), dec!(80.0));
        // 721 days => 15% bracket
        assert_eq!(exempt_equivalent_of(dec!(100), 721), dec!(85.0));
    }

    #[test]
    fn test_taxable_equivalent_grosses_up_by_bracket() {
        // 90% DI exempt needs 90 / 0.85 ≈ 105.88% DI taxable past 720 days
        let rate = taxable_equivalent_of(dec!(90), 721).unwrap();
        assert!((rate - dec!(105.882352)).abs() < dec!(0.001));
    }

    #[test]
    fn test_round_trip_is_identity() {
        for term in [30u32, 180, 181, 360, 361, 720, 721] {
            let rate = dec!(97.5);
            let back = taxable_equivalent_of(exempt_equivalent_of(rate, term), term).unwrap();
            assert!(
                (back - rate).abs() < dec!(0.0000001),
                "round trip at {} days drifted: {}",
                term,
                back
            );
        }
    }

    #[test]
    fn test_gross_up_envelope_reports_bracket() {
        let input = GrossUpInput {
            rate_pct_di: dec!(100),
            term_days: 200,
        };
        let output = gross_up(&input).unwrap();
        assert_eq!(output.result.tax_rate, dec!(20.0));
        assert_eq!(output.result.exempt_equivalent, dec!(80.0));
    }

    #[test]
    fn test_gross_up_rejects_zero_term() {
        let input = GrossUpInput {
            rate_pct_di: dec!(100),
            term_days: 0,
        };
        assert!(gross_up(&input).is_err());
    }
}
