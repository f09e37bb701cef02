//! Budget and insight computations. Everything here is a pure function of
//! the ledger and a declared monthly income.

use rust_decimal::Decimal;
use std::slice;

use crate::error::{Result, TrackerError};
use crate::ledger::Ledger;
use crate::models::{BudgetConfig, ExpenseRecord};

/// Budgeted categories and their share of monthly income. The shares add up
/// to 60%; the remaining 40% is left unbudgeted on purpose.
pub(crate) const BUDGET_SHARES: [(&str, Decimal); 3] = [
    ("groceries", Decimal::from_parts(20, 0, 0, false, 2)),
    ("entertainment", Decimal::from_parts(10, 0, 0, false, 2)),
    ("bills", Decimal::from_parts(30, 0, 0, false, 2)),
];

/// Categories never flagged as bad expenses. Independent of `BUDGET_SHARES`:
/// rent is exempt without being budgeted, and bills/entertainment are
/// budgeted without being exempt.
pub(crate) const ANOMALY_EXEMPT: [&str; 2] = ["rent", "groceries"];

/// An expense above this fraction of monthly income is flagged.
pub(crate) const ANOMALY_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

pub(crate) fn budgeted_categories() -> Vec<&'static str> {
    BUDGET_SHARES.iter().map(|(name, _)| *name).collect()
}

pub(crate) fn derive_budgets(monthly_income: Decimal) -> Result<BudgetConfig> {
    if monthly_income <= Decimal::ZERO {
        return Err(TrackerError::InvalidIncome(format!(
            "monthly income must be positive, got {monthly_income}"
        )));
    }

    Ok(BudgetConfig {
        monthly_income,
        category_budgets: BUDGET_SHARES
            .iter()
            .map(|(name, share)| (*name, monthly_income * *share))
            .collect(),
    })
}

/// Unspent allocation for `category`, clamped at zero. Exactly-on-budget and
/// over-budget both report zero; use [`is_over_budget`] to tell them apart.
pub(crate) fn remaining_budget(category: &str, ledger: &Ledger, config: &BudgetConfig) -> Decimal {
    let remaining = config.budget_for(category) - ledger.spent_by_category(category);
    remaining.max(Decimal::ZERO)
}

pub(crate) fn is_over_budget(category: &str, ledger: &Ledger, config: &BudgetConfig) -> bool {
    ledger.spent_by_category(category) > config.budget_for(category)
}

pub(crate) fn anomaly_threshold(monthly_income: Decimal) -> Decimal {
    monthly_income * ANOMALY_RATE
}

pub(crate) fn is_anomalous(record: &ExpenseRecord, monthly_income: Decimal) -> bool {
    exceeds_threshold(record, anomaly_threshold(monthly_income))
}

fn exceeds_threshold(record: &ExpenseRecord, threshold: Decimal) -> bool {
    !ANOMALY_EXEMPT.contains(&record.category.as_str()) && record.amount > threshold
}

/// Lazily yields bad expenses in ledger order. Clone it (or call
/// [`detect_anomalies`] again) to walk the sequence from the start.
pub(crate) fn detect_anomalies(ledger: &Ledger, monthly_income: Decimal) -> Anomalies<'_> {
    Anomalies {
        records: ledger.records().iter(),
        threshold: anomaly_threshold(monthly_income),
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Anomalies<'a> {
    records: slice::Iter<'a, ExpenseRecord>,
    threshold: Decimal,
}

impl<'a> Iterator for Anomalies<'a> {
    type Item = &'a ExpenseRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let threshold = self.threshold;
        self.records.find(|r| exceeds_threshold(r, threshold))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct AnnualProjection {
    pub(crate) annual_income: Decimal,
    /// Negative when yearly spending outruns income. Never clamped.
    pub(crate) annual_saving: Decimal,
}

pub(crate) fn annual_projection(
    monthly_income: Decimal,
    total_monthly_spend: Decimal,
) -> AnnualProjection {
    let annual_income = monthly_income * MONTHS_PER_YEAR;
    AnnualProjection {
        annual_income,
        annual_saving: annual_income - total_monthly_spend * MONTHS_PER_YEAR,
    }
}
