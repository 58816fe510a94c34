//! Small conversion helpers shared by the repository models.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored decimal column. Stored values are written by us from
/// `Decimal::to_string`, so a parse failure means corruption; log it and
/// fall back to zero rather than failing the whole row.
pub(crate) fn parse_decimal(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(decimal) => decimal,
        Err(err) => {
            log::error!("Failed to parse {} '{}': {}. Falling back to ZERO.", field_name, value, err);
            Decimal::ZERO
        }
    }
}

/// Parses an optional stored decimal column.
pub(crate) fn parse_optional_decimal(value: Option<&str>, field_name: &str) -> Option<Decimal> {
    value.map(|v| parse_decimal(v, field_name))
}
