use clap::Args;
use serde_json::Value;

use renda_fixa_core::schedule;

use super::{resolve_simulation_input, InstrumentArg, MarketArgs};

/// Arguments for the monthly accrual schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Instrument to expand
    #[arg(long, value_enum, default_value_t = InstrumentArg::Cdb)]
    pub instrument: InstrumentArg,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = resolve_simulation_input(&args.market)?;
    let result = schedule::generate(args.instrument.into(), &input)?;
    Ok(serde_json::to_value(result)?)
}
