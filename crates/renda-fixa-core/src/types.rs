use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates quoted in percentage points, as the Brazilian market quotes them
/// (22.5 = 22.5%, 100 = 100% of DI). Never as decimal fractions.
pub type Percent = Decimal;

/// Unit of the term field at the input boundary. Normalized to days before
/// any calculation: 1 month = 30 days, 1 year = 365 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermUnit {
    #[default]
    Days,
    Months,
    Years,
}

impl TermUnit {
    /// Convert a term expressed in this unit into elapsed days.
    pub fn in_days(&self, term: u32) -> u32 {
        match self {
            TermUnit::Days => term,
            TermUnit::Months => term * 30,
            TermUnit::Years => term * 365,
        }
    }
}

/// A single simulation request. The term is already normalized to days;
/// the input boundary owns unit conversion and locale parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Principal applied, in currency units
    pub principal: Money,
    /// Holding period in elapsed days
    pub term_days: u32,
    /// Annual DI (interbank) rate, % a.a.
    pub di_rate: Percent,
    /// Annual savings-reference (SELIC) rate, % a.a.
    pub savings_rate: Percent,
    /// CDB/RDB/LC rate as % of DI
    pub cdb_rate: Percent,
    /// LCI/LCA rate as % of DI
    pub lci_rate: Percent,
}

/// The three instrument classes the simulator compares. Savings and the
/// exempt CDI note pay no tax and no IOF; the taxable CDI note pays both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    Savings,
    TaxableCdi,
    ExemptCdi,
}

impl InstrumentKind {
    /// Market label used by the exporters.
    pub fn label(&self) -> &'static str {
        match self {
            InstrumentKind::Savings => "Poupança",
            InstrumentKind::TaxableCdi => "CDB/RDB",
            InstrumentKind::ExemptCdi => "LCI/LCA",
        }
    }
}

/// Net result of a single-shot evaluation at redemption. IOF and income
/// tax fields are populated only for the taxable CDI note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// Gross interest accrued over the full term
    pub gross_interest: Money,
    /// Early-redemption IOF deduction (taxable note, term ≤ 30 days)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iof_amount: Option<Money>,
    /// Income tax on the net-of-IOF interest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Money>,
    /// Income tax bracket applied, in percentage points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Percent>,
}

impl YieldResult {
    /// Interest net of IOF and income tax.
    pub fn net_interest(&self) -> Money {
        self.gross_interest
            - self.iof_amount.unwrap_or(Decimal::ZERO)
            - self.tax_amount.unwrap_or(Decimal::ZERO)
    }
}

/// One exporter row: a `YieldResult` joined with the invested amount and
/// the derived net figures the report and CSV layouts need. Absent
/// deductions serialize as null so every row keeps the full column set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentSummary {
    pub instrument: InstrumentKind,
    pub invested: Money,
    pub gross_interest: Money,
    pub iof_amount: Option<Money>,
    pub tax_amount: Option<Money>,
    pub tax_rate: Option<Percent>,
    pub net_interest: Money,
    pub total_value: Money,
    /// Net return over the invested amount, in percentage points
    pub net_return_pct: Percent,
}

impl InstrumentSummary {
    pub fn from_result(kind: InstrumentKind, invested: Money, result: &YieldResult) -> Self {
        let net_interest = result.net_interest();
        let net_return_pct = if invested > Decimal::ZERO {
            net_interest / invested * dec!(100)
        } else {
            Decimal::ZERO
        };
        InstrumentSummary {
            instrument: kind,
            invested,
            gross_interest: result.gross_interest,
            iof_amount: result.iof_amount,
            tax_amount: result.tax_amount,
            tax_rate: result.tax_rate,
            net_interest,
            total_value: invested + net_interest,
            net_return_pct,
        }
    }
}

/// One ~30-day accrual step of the monthly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStep {
    /// 1-based month index
    pub month: u32,
    /// Gross interest accrued during this step
    pub gross_interest: Money,
    /// Step interest net of step-local income tax, where applicable
    pub net_interest: Money,
    /// Running balance after reinvesting the step's net interest
    pub balance: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_unit_normalization() {
        assert_eq!(TermUnit::Days.in_days(45), 45);
        assert_eq!(TermUnit::Months.in_days(3), 90);
        assert_eq!(TermUnit::Years.in_days(2), 730);
    }

    #[test]
    fn test_net_interest_without_deductions() {
        let result = YieldResult {
            gross_interest: dec!(120.50),
            iof_amount: None,
            tax_amount: None,
            tax_rate: None,
        };
        assert_eq!(result.net_interest(), dec!(120.50));
    }

    #[test]
    fn test_net_interest_with_deductions() {
        let result = YieldResult {
            gross_interest: dec!(100),
            iof_amount: Some(dec!(10)),
            tax_amount: Some(dec!(18)),
            tax_rate: Some(dec!(20.0)),
        };
        assert_eq!(result.net_interest(), dec!(72));
    }

    #[test]
    fn test_summary_derives_total_and_return_pct() {
        let result = YieldResult {
            gross_interest: dec!(50),
            iof_amount: None,
            tax_amount: None,
            tax_rate: None,
        };
        let summary =
            InstrumentSummary::from_result(InstrumentKind::ExemptCdi, dec!(1000), &result);
        assert_eq!(summary.net_interest, dec!(50));
        assert_eq!(summary.total_value, dec!(1050));
        assert_eq!(summary.net_return_pct, dec!(5));
    }
}
