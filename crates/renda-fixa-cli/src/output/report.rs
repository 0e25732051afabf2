//! Plain-text report: comparison table, net-return bar chart, gross-up
//! summary and the monthly schedule, laid out as a two-page document.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{builder::Builder, Table};

use renda_fixa_core::engine::SimulationOutput;
use renda_fixa_core::gross_up::GrossUpOutput;
use renda_fixa_core::schedule::ScheduleOutput;
use renda_fixa_core::types::{ScheduleStep, SimulationInput};

const PAGE_WIDTH: usize = 72;
const BAR_WIDTH: usize = 40;

/// Schedule rows that fit on one page. Longer schedules keep the first
/// and last rows and elide the middle.
const SCHEDULE_PAGE_ROWS: usize = 20;
const SCHEDULE_HEAD_ROWS: usize = 10;
const SCHEDULE_TAIL_ROWS: usize = 9;

/// Render the full report document.
pub fn render(
    input: &SimulationInput,
    simulation: &SimulationOutput,
    grossup: &GrossUpOutput,
    schedule: &ScheduleOutput,
) -> String {
    let mut doc = String::new();

    doc.push_str(&heading("FIXED-INCOME SIMULATION"));
    doc.push_str(&format!(
        "Principal {}  ·  Term {} days  ·  DI {} a.a.  ·  SELIC {} a.a.\n\n",
        format_brl(input.principal),
        input.term_days,
        format_pct(input.di_rate),
        format_pct(input.savings_rate),
    ));

    doc.push_str(&comparison_table(simulation));
    doc.push('\n');
    doc.push_str(&bar_chart(simulation));
    doc.push('\n');
    doc.push_str(&grossup_block(input, grossup));
    doc.push_str(&page_footer(1, 2));

    doc.push_str(&heading(&format!(
        "MONTHLY SCHEDULE — {}",
        schedule.instrument.label()
    )));
    doc.push_str(&schedule_table(&schedule.steps));
    doc.push_str(&format!(
        "\nFinal balance: {}\n",
        format_brl(schedule.final_balance)
    ));
    doc.push_str(&page_footer(2, 2));

    doc
}

fn heading(title: &str) -> String {
    format!("{}\n{}\n\n", title, "─".repeat(PAGE_WIDTH))
}

fn page_footer(page: usize, total: usize) -> String {
    format!("\n{}\npage {} of {}\n\n", "═".repeat(PAGE_WIDTH), page, total)
}

fn comparison_table(simulation: &SimulationOutput) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "Instrument",
        "Invested",
        "Gross",
        "IOF",
        "Income tax",
        "Tax rate",
        "Net",
        "Total",
    ]);
    for row in &simulation.results {
        builder.push_record([
            row.instrument.label().to_string(),
            format_brl(row.invested),
            format_brl(row.gross_interest),
            row.iof_amount.map(format_brl).unwrap_or_else(|| "—".into()),
            row.tax_amount.map(format_brl).unwrap_or_else(|| "—".into()),
            row.tax_rate.map(format_pct).unwrap_or_else(|| "—".into()),
            format_brl(row.net_interest),
            format_brl(row.total_value),
        ]);
    }
    format!("{}\n", Table::from(builder))
}

fn bar_chart(simulation: &SimulationOutput) -> String {
    let max_pct = simulation
        .results
        .iter()
        .map(|r| r.net_return_pct)
        .max()
        .unwrap_or(Decimal::ZERO);

    let mut chart = String::from("Net return comparison\n");
    for row in &simulation.results {
        let width = if max_pct > Decimal::ZERO && row.net_return_pct > Decimal::ZERO {
            (row.net_return_pct / max_pct * Decimal::from(BAR_WIDTH as u32))
                .round()
                .to_usize()
                .unwrap_or(0)
                .min(BAR_WIDTH)
        } else {
            0
        };
        chart.push_str(&format!(
            "{:<10} {:<width$} {}\n",
            row.instrument.label(),
            "█".repeat(width),
            format_pct(row.net_return_pct),
            width = BAR_WIDTH,
        ));
    }
    chart
}

fn grossup_block(input: &SimulationInput, grossup: &GrossUpOutput) -> String {
    format!(
        "Gross-up at the {} IR bracket\n\
         A taxable note at {} of DI nets like an exempt note at {} of DI.\n\
         An exempt note at {} of DI requires a taxable note at {} of DI.\n",
        format_pct(grossup.tax_rate),
        format_pct_di(input.cdb_rate),
        format_pct_di(grossup.exempt_equivalent),
        format_pct_di(input.cdb_rate),
        format_pct_di(grossup.taxable_equivalent),
    )
}

fn schedule_table(steps: &[ScheduleStep]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Month", "Gross", "Net", "Balance"]);

    if steps.len() > SCHEDULE_PAGE_ROWS {
        for step in &steps[..SCHEDULE_HEAD_ROWS] {
            push_step(&mut builder, step);
        }
        builder.push_record(["⋯", "⋯", "⋯", "⋯"]);
        for step in &steps[steps.len() - SCHEDULE_TAIL_ROWS..] {
            push_step(&mut builder, step);
        }
    } else {
        for step in steps {
            push_step(&mut builder, step);
        }
    }

    format!("{}\n", Table::from(builder))
}

fn push_step(builder: &mut Builder, step: &ScheduleStep) {
    builder.push_record([
        step.month.to_string(),
        format_brl(step.gross_interest),
        format_brl(step.net_interest),
        format_brl(step.balance),
    ]);
}

/// Brazilian currency format: `R$ 1.234,56`.
fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit as char);
    }

    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// Percentage with comma decimal mark: `12,65%`.
fn format_pct(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded).replace('.', ",")
}

/// `% of DI` quote: `102,50%`.
fn format_pct_di(value: Decimal) -> String {
    format_pct(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
