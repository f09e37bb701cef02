//! Display formatting shared by the report text and the terminal UI.

use rust_decimal::Decimal;

pub(crate) const CURRENCY: &str = "INR";

/// Format a decimal amount with thousand separators, 2 decimal places and
/// the currency label.
/// e.g. `1234567.89` → `"1,234,567.89 INR"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-{with_commas}.{dec_part} {CURRENCY}")
    } else {
        format!("{with_commas}.{dec_part} {CURRENCY}")
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
