use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use renda_fixa_core::gross_up::{self, GrossUpInput};
use renda_fixa_core::types::TermUnit;
use rust_decimal::Decimal;

use super::TermUnitArg;
use crate::input;

/// Arguments for gross-up rate equivalence
#[derive(Args)]
pub struct GrossupArgs {
    /// Rate to convert, % of DI (accepts 97,5 or 97.5)
    #[arg(long)]
    pub rate: Option<String>,

    /// Holding period, in --term-unit units
    #[arg(long)]
    pub term: Option<u32>,

    /// Unit of --term
    #[arg(long, value_enum, default_value_t = TermUnitArg::Days)]
    pub term_unit: TermUnitArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// JSON shape of a gross-up request.
#[derive(Debug, Deserialize)]
pub struct GrossUpRequest {
    pub rate_pct_di: Decimal,
    pub term: u32,
    #[serde(default)]
    pub term_unit: TermUnit,
}

pub fn run_grossup(args: GrossupArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: GrossUpRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let raw = args
            .rate
            .as_deref()
            .ok_or("--rate is required (or provide --input)")?;
        GrossUpRequest {
            rate_pct_di: input::locale::parse_decimal(raw)?,
            term: args.term.ok_or("--term is required (or provide --input)")?,
            term_unit: args.term_unit.into(),
        }
    };

    let grossup_input = GrossUpInput {
        rate_pct_di: request.rate_pct_di,
        term_days: request.term_unit.in_days(request.term),
    };
    let result = gross_up::gross_up(&grossup_input)?;
    Ok(serde_json::to_value(result)?)
}
