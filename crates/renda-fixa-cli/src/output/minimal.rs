use serde_json::Value;

/// Print just the key answer from the output.
///
/// The instrument comparison prints one `label: net return %` line per
/// instrument; other results fall back to well-known headline fields,
/// then to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(Value::Array(rows)) = result_obj.as_object().and_then(|m| m.get("results")) {
        for row in rows {
            if let Value::Object(map) = row {
                let label = map
                    .get("instrument")
                    .map(format_minimal)
                    .unwrap_or_default();
                let pct = map
                    .get("net_return_pct")
                    .map(format_minimal)
                    .unwrap_or_default();
                println!("{}: {}%", label, pct);
            }
        }
        return;
    }

    let priority_keys = ["final_balance", "exempt_equivalent", "taxable_equivalent"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
