pub mod grossup;
pub mod report;
pub mod schedule;
pub mod simulate;

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Deserialize;

use renda_fixa_core::types::{InstrumentKind, SimulationInput, TermUnit};

use crate::input;

/// Market inputs shared by simulate, schedule and report.
#[derive(Args)]
pub struct MarketArgs {
    /// Principal applied (accepts 1.234,56 or 1234.56)
    #[arg(long)]
    pub principal: Option<String>,

    /// Holding period, in --term-unit units
    #[arg(long)]
    pub term: Option<u32>,

    /// Unit of --term
    #[arg(long, value_enum, default_value_t = TermUnitArg::Days)]
    pub term_unit: TermUnitArg,

    /// Annual DI rate, % a.a.
    #[arg(long)]
    pub di_rate: Option<String>,

    /// Annual SELIC rate for savings, % a.a.
    #[arg(long)]
    pub savings_rate: Option<String>,

    /// CDB/RDB/LC rate, % of DI
    #[arg(long)]
    pub cdb_rate: Option<String>,

    /// LCI/LCA rate, % of DI
    #[arg(long)]
    pub lci_rate: Option<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TermUnitArg {
    Days,
    Months,
    Years,
}

impl From<TermUnitArg> for TermUnit {
    fn from(arg: TermUnitArg) -> Self {
        match arg {
            TermUnitArg::Days => TermUnit::Days,
            TermUnitArg::Months => TermUnit::Months,
            TermUnitArg::Years => TermUnit::Years,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InstrumentArg {
    /// Savings account (poupança)
    Savings,
    /// Taxable CDI note (CDB/RDB/LC)
    Cdb,
    /// Tax-exempt CDI note (LCI/LCA)
    Lci,
}

impl From<InstrumentArg> for InstrumentKind {
    fn from(arg: InstrumentArg) -> Self {
        match arg {
            InstrumentArg::Savings => InstrumentKind::Savings,
            InstrumentArg::Cdb => InstrumentKind::TaxableCdi,
            InstrumentArg::Lci => InstrumentKind::ExemptCdi,
        }
    }
}

/// The JSON shape of the input boundary: term plus unit, not yet
/// normalized to days.
#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub principal: Decimal,
    pub term: u32,
    #[serde(default)]
    pub term_unit: TermUnit,
    pub di_rate: Decimal,
    pub savings_rate: Decimal,
    pub cdb_rate: Decimal,
    pub lci_rate: Decimal,
}

impl SimulationRequest {
    pub fn normalize(self) -> SimulationInput {
        SimulationInput {
            principal: self.principal,
            term_days: self.term_unit.in_days(self.term),
            di_rate: self.di_rate,
            savings_rate: self.savings_rate,
            cdb_rate: self.cdb_rate,
            lci_rate: self.lci_rate,
        }
    }
}

/// Resolve the simulation input from a JSON file, piped stdin, or flags.
pub fn resolve_simulation_input(
    args: &MarketArgs,
) -> Result<SimulationInput, Box<dyn std::error::Error>> {
    let request: SimulationRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SimulationRequest {
            principal: parse_required(&args.principal, "--principal")?,
            term: args.term.ok_or("--term is required (or provide --input)")?,
            term_unit: args.term_unit.into(),
            di_rate: parse_required(&args.di_rate, "--di-rate")?,
            savings_rate: parse_required(&args.savings_rate, "--savings-rate")?,
            cdb_rate: parse_required(&args.cdb_rate, "--cdb-rate")?,
            lci_rate: parse_required(&args.lci_rate, "--lci-rate")?,
        }
    };
    Ok(request.normalize())
}

fn parse_required(
    raw: &Option<String>,
    flag: &str,
) -> Result<Decimal, Box<dyn std::error::Error>> {
    let raw = raw
        .as_deref()
        .ok_or_else(|| format!("{} is required (or provide --input)", flag))?;
    Ok(input::locale::parse_decimal(raw)?)
}
