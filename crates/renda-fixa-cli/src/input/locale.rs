//! Locale-aware numeric parsing for the input boundary.
//!
//! Brazilian users type `1.234,56`; machine-formatted inputs use `1234.56`.
//! The comma decides: when present, dots are thousands separators and the
//! comma is the decimal mark; otherwise the string is parsed as-is.

use rust_decimal::Decimal;
use std::str::FromStr;

use renda_fixa_core::RendaFixaError;

/// Parse a decimal number in either pt-BR or plain notation.
pub fn parse_decimal(raw: &str) -> Result<Decimal, RendaFixaError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RendaFixaError::ParseError(
            "required numeric field is empty".into(),
        ));
    }

    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    Decimal::from_str(&normalized)
        .map_err(|_| RendaFixaError::ParseError(format!("'{}' is not a valid number", trimmed)))
}
