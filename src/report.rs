use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::engine::{self, AnnualProjection};
use crate::format::{capitalize, format_amount};
use crate::ledger::Ledger;
use crate::models::{BudgetConfig, ExpenseRecord};

/// Spending versus budget for one budgeted category.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryStatus {
    pub(crate) category: &'static str,
    pub(crate) budget: Decimal,
    pub(crate) spent: Decimal,
    pub(crate) remaining: Decimal,
    pub(crate) over_budget: bool,
}

impl CategoryStatus {
    /// Fraction of the allocation used, capped at 1. Zero when nothing is
    /// allocated.
    pub(crate) fn used_ratio(&self) -> f64 {
        use rust_decimal::prelude::ToPrimitive;

        if self.budget <= Decimal::ZERO {
            return 0.0;
        }
        (self.spent / self.budget).to_f64().unwrap_or(0.0).min(1.0)
    }

    pub(crate) fn label(&self) -> &'static str {
        if self.over_budget {
            "over budget"
        } else {
            "within budget"
        }
    }
}

/// Every figure shown on a finance report, computed in one pass from the
/// current ledger and budget.
#[derive(Debug, Clone, Default)]
pub(crate) struct Report {
    pub(crate) monthly_income: Decimal,
    pub(crate) total_spent: Decimal,
    pub(crate) spent_today: Decimal,
    pub(crate) projection: AnnualProjection,
    pub(crate) categories: Vec<CategoryStatus>,
    pub(crate) anomalies: Vec<ExpenseRecord>,
    pub(crate) record_count: usize,
}

impl Report {
    pub(crate) fn build(ledger: &Ledger, config: &BudgetConfig, today: NaiveDate) -> Self {
        let total_spent = ledger.total_spent();

        let categories = config
            .category_budgets
            .iter()
            .map(|&(category, budget)| CategoryStatus {
                category,
                budget,
                spent: ledger.spent_by_category(category),
                remaining: engine::remaining_budget(category, ledger, config),
                over_budget: engine::is_over_budget(category, ledger, config),
            })
            .collect();

        Self {
            monthly_income: config.monthly_income,
            total_spent,
            spent_today: ledger.spent_today(today),
            projection: engine::annual_projection(config.monthly_income, total_spent),
            categories,
            anomalies: engine::detect_anomalies(ledger, config.monthly_income)
                .cloned()
                .collect(),
            record_count: ledger.len(),
        }
    }

    pub(crate) fn has_deficit(&self) -> bool {
        self.projection.annual_saving < Decimal::ZERO
    }

    /// Plain-text rendering for non-interactive output.
    pub(crate) fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Monthly income: {}", format_amount(self.monthly_income)),
            format!("Total expenses: {}", format_amount(self.total_spent)),
            format!("Spent today: {}", format_amount(self.spent_today)),
            format!(
                "Annual income: {}",
                format_amount(self.projection.annual_income)
            ),
            format!(
                "Annual saving: {}",
                format_amount(self.projection.annual_saving)
            ),
            String::new(),
        ];

        for status in &self.categories {
            lines.push(format!(
                "{}: {} remaining, {}",
                capitalize(status.category),
                format_amount(status.remaining),
                status.label()
            ));
        }

        lines.push(String::new());
        lines.push("Bad expenses (excluding rent and groceries):".to_string());
        if self.anomalies.is_empty() {
            lines.push("  none".to_string());
        }
        for (i, record) in self.anomalies.iter().enumerate() {
            lines.push(format!(
                "{}. {}: {} ({})",
                i + 1,
                record.category,
                format_amount(record.amount),
                record.timestamp_text()
            ));
        }
        lines
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
