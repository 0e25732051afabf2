pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod report;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The row collections our result envelopes can carry: the instrument
/// comparison and the monthly schedule.
pub(crate) fn result_rows(result: &Value) -> Option<&Vec<Value>> {
    let map = result.as_object()?;
    for key in ["results", "steps"] {
        if let Some(Value::Array(rows)) = map.get(key) {
            if rows.iter().all(|r| r.is_object()) && !rows.is_empty() {
                return Some(rows);
            }
        }
    }
    None
}
