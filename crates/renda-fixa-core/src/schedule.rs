//! Monthly accrual schedule: expands a holding period into successive
//! 30-day steps with a running balance.
//!
//! Unlike the single-shot engine, the taxable note's schedule withholds
//! income tax every step and reinvests only the net amount. The final step
//! may be shorter than 30 days and still accrues — the savings sub-month
//! flooring rule does not apply here.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::accrual;
use crate::engine;
use crate::indexer;
use crate::tax;
use crate::types::{
    with_metadata, ComputationOutput, InstrumentKind, Money, ScheduleStep, SimulationInput,
};
use crate::RendaFixaResult;

const DAYS_IN_MONTH: u32 = 30;

/// Monthly schedule plus the figures the report layout needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub instrument: InstrumentKind,
    pub steps: Vec<ScheduleStep>,
    /// Balance after the last step; equals principal plus the sum of all
    /// step net interest
    pub final_balance: Money,
}

/// Expand the holding period into `ceil(term / 30)` accrual steps.
pub fn expand(
    kind: InstrumentKind,
    input: &SimulationInput,
) -> RendaFixaResult<Vec<ScheduleStep>> {
    engine::validate_input(input)?;

    let daily_index = match kind {
        InstrumentKind::Savings => indexer::savings_daily_index(input.savings_rate),
        InstrumentKind::TaxableCdi => indexer::cdi_daily_index(input.cdb_rate, input.di_rate),
        InstrumentKind::ExemptCdi => indexer::cdi_daily_index(input.lci_rate, input.di_rate),
    };

    // Bracket is fixed by the total term, not by each step's position
    let retained = match kind {
        InstrumentKind::TaxableCdi => {
            Decimal::ONE - tax::income_tax_rate(input.term_days) / dec!(100)
        }
        _ => Decimal::ONE,
    };

    let step_count = input.term_days.div_ceil(DAYS_IN_MONTH);
    let mut steps = Vec::with_capacity(step_count as usize);
    let mut balance = input.principal;

    for month in 1..=step_count {
        let elapsed = (month - 1) * DAYS_IN_MONTH;
        let step_days = DAYS_IN_MONTH.min(input.term_days - elapsed);
        let gross = accrual::compound(balance, daily_index, step_days);
        let net = (gross * retained)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        balance += net;
        steps.push(ScheduleStep {
            month,
            gross_interest: gross,
            net_interest: net,
            balance,
        });
    }

    Ok(steps)
}

/// Expand the schedule and wrap it in the standard output envelope.
pub fn generate(
    kind: InstrumentKind,
    input: &SimulationInput,
) -> RendaFixaResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let steps = expand(kind, input)?;

    if input.term_days % DAYS_IN_MONTH != 0 {
        warnings.push(format!(
            "Final step covers a partial month of {} days",
            input.term_days % DAYS_IN_MONTH
        ));
    }
    if kind == InstrumentKind::TaxableCdi {
        warnings.push(
            "Schedule withholds income tax every step and reinvests the net; \
             it will not match the single-shot redemption result"
                .into(),
        );
    }

    let final_balance = steps.last().map(|s| s.balance).unwrap_or(input.principal);

    let output = ScheduleOutput {
        instrument: kind,
        steps,
        final_balance,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "30-day compound accrual steps on the running net balance",
        input,
        warnings,
        elapsed,
        output,
    ))
}
