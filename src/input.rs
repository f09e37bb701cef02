//! Validation boundary between user-typed text and the tracker core.
//! Nothing invalid gets past here, so rejected input never touches state.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{Result, TrackerError};

/// Upper bound (one trillion) for a single typed amount. Keeps yearly
/// projections over a few thousand records well inside `Decimal` range.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

pub(crate) fn parse_income(text: &str) -> Result<Decimal> {
    let income = parse_decimal(text).ok_or_else(|| {
        TrackerError::InvalidIncome(format!("'{}' is not a number", text.trim()))
    })?;
    if income <= Decimal::ZERO {
        return Err(TrackerError::InvalidIncome(
            "please enter a positive amount".into(),
        ));
    }
    if income > MAX_AMOUNT {
        return Err(TrackerError::InvalidIncome(format!(
            "amounts above {MAX_AMOUNT} are not supported"
        )));
    }
    Ok(income)
}

/// Returns the trimmed category and the amount.
pub(crate) fn parse_expense(category: &str, amount: &str) -> Result<(String, Decimal)> {
    let category = category.trim();
    if category.is_empty() {
        return Err(TrackerError::InvalidExpense("category is required".into()));
    }

    let amount = parse_decimal(amount).ok_or_else(|| {
        TrackerError::InvalidExpense(format!("amount '{}' is not a number", amount.trim()))
    })?;
    if amount <= Decimal::ZERO {
        return Err(TrackerError::InvalidExpense(
            "amount must be greater than zero".into(),
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(TrackerError::InvalidExpense(format!(
            "amounts above {MAX_AMOUNT} are not supported"
        )));
    }

    Ok((category.to_string(), amount))
}

/// Accepts plain and scientific notation, with optional currency marks and
/// thousand separators ("INR 1,250.50", "₹900", "1.5e3").
fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let without_label = trimmed
        .strip_prefix("INR")
        .or_else(|| trimmed.strip_suffix("INR"))
        .unwrap_or(trimmed);
    let cleaned = without_label.replace(['$', '₹', ','], "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
