use clap::Args;
use serde_json::Value;

use renda_fixa_core::engine;

use super::{resolve_simulation_input, MarketArgs};

/// Arguments for the three-instrument simulation
#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub market: MarketArgs,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = resolve_simulation_input(&args.market)?;
    let result = engine::simulate(&input)?;
    Ok(serde_json::to_value(result)?)
}
