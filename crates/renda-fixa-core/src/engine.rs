//! Yield engine: orchestrates rate indexing, compound accrual and the tax
//! tables into one net result per instrument.
//!
//! Taxation here is single-shot at redemption: IOF comes out of gross
//! interest first, then income tax applies to the net-of-IOF base. The
//! monthly schedule in `schedule` deliberately uses a different model
//! (tax withheld and reinvested each period); the two are not expected to
//! reconcile to the same total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::accrual;
use crate::error::RendaFixaError;
use crate::indexer;
use crate::tax;
use crate::types::{
    with_metadata, ComputationOutput, InstrumentKind, InstrumentSummary, SimulationInput,
    YieldResult,
};
use crate::RendaFixaResult;

/// Output of a full three-instrument simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// One summary row per instrument, in fixed order:
    /// savings, taxable CDI, exempt CDI
    pub results: Vec<InstrumentSummary>,
    /// Income-tax bracket in effect for the term, % points
    pub tax_bracket: Decimal,
    /// IOF rate in effect for the term, % points (0 past 30 days)
    pub iof_bracket: Decimal,
}

/// Evaluate a single instrument over the full holding period.
pub fn evaluate(kind: InstrumentKind, input: &SimulationInput) -> RendaFixaResult<YieldResult> {
    validate_input(input)?;

    match kind {
        InstrumentKind::Savings => {
            let index = indexer::savings_daily_index(input.savings_rate);
            let days = accrual::full_period_days(input.term_days);
            let gross = accrual::compound(input.principal, index, days);
            Ok(YieldResult {
                gross_interest: gross,
                iof_amount: None,
                tax_amount: None,
                tax_rate: None,
            })
        }
        InstrumentKind::ExemptCdi => {
            let index = indexer::cdi_daily_index(input.lci_rate, input.di_rate);
            let gross = accrual::compound(input.principal, index, input.term_days);
            Ok(YieldResult {
                gross_interest: gross,
                iof_amount: None,
                tax_amount: None,
                tax_rate: None,
            })
        }
        InstrumentKind::TaxableCdi => {
            let index = indexer::cdi_daily_index(input.cdb_rate, input.di_rate);
            let gross = accrual::compound(input.principal, index, input.term_days);
            let iof = tax::iof_amount(input.term_days, gross);
            let tax_rate = tax::income_tax_rate(input.term_days);
            // Income tax never applies to the slice IOF already consumed
            let tax_amount = (gross - iof) * tax_rate / dec!(100);
            Ok(YieldResult {
                gross_interest: gross,
                iof_amount: Some(iof),
                tax_amount: Some(tax_amount),
                tax_rate: Some(tax_rate),
            })
        }
    }
}

/// Evaluate all three instruments and derive the exporter rows.
pub fn simulate(
    input: &SimulationInput,
) -> RendaFixaResult<ComputationOutput<SimulationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    if input.term_days <= 30 {
        warnings.push(format!(
            "Term of {} days is within the IOF window; {}% of the taxable note's interest is withheld",
            input.term_days,
            tax::iof_rate(input.term_days)
        ));
    }
    if input.term_days < 30 {
        warnings.push("Savings accrues nothing for holding periods under 30 days".into());
    }

    let kinds = [
        InstrumentKind::Savings,
        InstrumentKind::TaxableCdi,
        InstrumentKind::ExemptCdi,
    ];
    let mut results = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let result = evaluate(kind, input)?;
        results.push(InstrumentSummary::from_result(kind, input.principal, &result));
    }

    let output = SimulationOutput {
        results,
        tax_bracket: tax::income_tax_rate(input.term_days),
        iof_bracket: tax::iof_rate(input.term_days),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Compound daily accrual with regressive IR bracket and 30-day IOF table",
        input,
        warnings,
        elapsed,
        output,
    ))
}

pub(crate) fn validate_input(input: &SimulationInput) -> RendaFixaResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(RendaFixaError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.term_days == 0 {
        return Err(RendaFixaError::InvalidInput {
            field: "term_days".into(),
            reason: "Term must be at least 1 day".into(),
        });
    }
    for (field, rate) in [
        ("di_rate", input.di_rate),
        ("savings_rate", input.savings_rate),
        ("cdb_rate", input.cdb_rate),
        ("lci_rate", input.lci_rate),
    ] {
        if rate < Decimal::ZERO {
            return Err(RendaFixaError::InvalidInput {
                field: field.into(),
                reason: "Rates cannot be negative".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_input() -> SimulationInput {
        SimulationInput {
            principal: dec!(1000),
            term_days: 360,
            di_rate: dec!(12.65),
            savings_rate: dec!(12.65),
            cdb_rate: dec!(100),
            lci_rate: dec!(90),
        }
    }

    #[test]
    fn test_savings_result_carries_no_tax_fields() {
        let result = evaluate(InstrumentKind::Savings, &base_input()).unwrap();
        assert!(result.iof_amount.is_none());
        assert!(result.tax_amount.is_none());
        assert!(result.tax_rate.is_none());
        assert!(result.gross_interest > Decimal::ZERO);
    }

    #[test]
    fn test_exempt_note_keeps_full_gross() {
        let result = evaluate(InstrumentKind::ExemptCdi, &base_input()).unwrap();
        assert!(result.tax_amount.is_none());
        assert_eq!(result.net_interest(), result.gross_interest);
    }

    #[test]
    fn test_taxable_note_applies_bracket_to_net_of_iof_base() {
        let result = evaluate(InstrumentKind::TaxableCdi, &base_input()).unwrap();
        let gross = result.gross_interest;
        // 360 days: 20% bracket, no IOF
        assert_eq!(result.iof_amount, Some(Decimal::ZERO));
        assert_eq!(result.tax_rate, Some(dec!(20.0)));
        assert_eq!(result.tax_amount, Some(gross * dec!(0.20)));
    }

    #[test]
    fn test_taxable_note_iof_reduces_taxable_base() {
        let mut input = base_input();
        input.term_days = 10;
        let result = evaluate(InstrumentKind::TaxableCdi, &input).unwrap();
        let gross = result.gross_interest;
        let iof = result.iof_amount.unwrap();
        // Day 10: 66% IOF, 22.5% bracket on what IOF left behind
        assert_eq!(iof, gross * dec!(0.66));
        assert_eq!(result.tax_amount, Some((gross - iof) * dec!(0.225)));
    }

    #[test]
    fn test_savings_sub_month_term_accrues_zero() {
        let mut input = base_input();
        input.term_days = 15;
        let result = evaluate(InstrumentKind::Savings, &input).unwrap();
        assert_eq!(result.gross_interest, Decimal::ZERO);
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        let mut input = base_input();
        input.principal = Decimal::ZERO;
        let err = evaluate(InstrumentKind::Savings, &input).unwrap_err();
        assert!(matches!(err, RendaFixaError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_zero_term() {
        let mut input = base_input();
        input.term_days = 0;
        assert!(simulate(&input).is_err());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let mut input = base_input();
        input.lci_rate = dec!(-1);
        assert!(simulate(&input).is_err());
    }

    #[test]
    fn test_simulate_emits_three_rows_in_fixed_order() {
        let output = simulate(&base_input()).unwrap();
        let rows = &output.result.results;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].instrument, InstrumentKind::Savings);
        assert_eq!(rows[1].instrument, InstrumentKind::TaxableCdi);
        assert_eq!(rows[2].instrument, InstrumentKind::ExemptCdi);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let input = base_input();
        let first = evaluate(InstrumentKind::TaxableCdi, &input).unwrap();
        let second = evaluate(InstrumentKind::TaxableCdi, &input).unwrap();
        assert_eq!(first, second);
    }
}
