use clap::Args;

use renda_fixa_core::engine;
use renda_fixa_core::gross_up::{self, GrossUpInput};
use renda_fixa_core::schedule;

use super::{resolve_simulation_input, InstrumentArg, MarketArgs};
use crate::output::report;

/// Arguments for the full text report
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Instrument whose monthly schedule appears in the report
    #[arg(long, value_enum, default_value_t = InstrumentArg::Cdb)]
    pub instrument: InstrumentArg,
}

pub fn run_report(args: ReportArgs) -> Result<String, Box<dyn std::error::Error>> {
    let input = resolve_simulation_input(&args.market)?;

    let simulation = engine::simulate(&input)?;
    let grossup = gross_up::gross_up(&GrossUpInput {
        rate_pct_di: input.cdb_rate,
        term_days: input.term_days,
    })?;
    let sched = schedule::generate(args.instrument.into(), &input)?;

    Ok(report::render(
        &input,
        &simulation.result,
        &grossup.result,
        &sched.result,
    ))
}
