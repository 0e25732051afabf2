mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::grossup::GrossupArgs;
use commands::report::ReportArgs;
use commands::schedule::ScheduleArgs;
use commands::simulate::SimulateArgs;

/// Fixed-income yield simulator for the Brazilian market
#[derive(Parser)]
#[command(
    name = "rfx",
    version,
    about = "Fixed-income yield simulator for the Brazilian market",
    long_about = "Simulates net returns for savings (poupança), taxable CDI notes \
                  (CDB/RDB/LC) and tax-exempt CDI notes (LCI/LCA) with decimal \
                  precision. Covers the regressive IR brackets, the 30-day IOF \
                  table, gross-up rate equivalence, and monthly accrual schedules."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate net returns for all three instruments
    Simulate(SimulateArgs),
    /// Expand one instrument into a month-by-month accrual schedule
    Schedule(ScheduleArgs),
    /// Convert between taxable and tax-exempt equivalent rates
    Grossup(GrossupArgs),
    /// Render the full comparison report (table, chart, gross-up, schedule)
    Report(ReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::simulate::run_simulate(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Grossup(args) => commands::grossup::run_grossup(args),
        Commands::Report(args) => match commands::report::run_report(args) {
            Ok(document) => {
                println!("{}", document);
                process::exit(0);
            }
            Err(e) => Err(e),
        },
        Commands::Version => {
            println!("rfx {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
