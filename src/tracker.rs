use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::engine;
use crate::error::Result;
use crate::input;
use crate::ledger::Ledger;
use crate::models::{BudgetConfig, BudgetState, ExpenseRecord};
use crate::report::Report;

/// Session context: the ledger plus the income declared in this session.
/// Passed explicitly to whatever drives it (TUI or one-shot CLI).
pub(crate) struct Tracker {
    ledger: Ledger,
    budget: BudgetState,
}

impl Tracker {
    pub(crate) fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            budget: BudgetState::Undeclared,
        }
    }

    /// Validates `text` and replaces the declared income. On error the
    /// previous declaration stays in effect.
    pub(crate) fn declare_income(&mut self, text: &str) -> Result<Decimal> {
        let income = input::parse_income(text)?;
        // Same rule the budgets are derived under; fails before any state changes.
        engine::derive_budgets(income)?;
        self.budget = BudgetState::Declared {
            monthly_income: income,
        };
        tracing::info!(%income, "monthly income declared");
        Ok(income)
    }

    pub(crate) fn record_expense(&mut self, category: &str, amount: &str) -> Result<ExpenseRecord> {
        let (category, amount) = input::parse_expense(category, amount)?;
        self.ledger.append(&category, amount)
    }

    /// Derived fresh from the current income on every call; never cached.
    pub(crate) fn budget_config(&self) -> BudgetConfig {
        match self.budget {
            BudgetState::Undeclared => {
                BudgetConfig::undeclared(&engine::budgeted_categories())
            }
            BudgetState::Declared { monthly_income } => engine::derive_budgets(monthly_income)
                .unwrap_or_else(|_| BudgetConfig::undeclared(&engine::budgeted_categories())),
        }
    }

    pub(crate) fn report(&self, today: NaiveDate) -> Report {
        Report::build(&self.ledger, &self.budget_config(), today)
    }

    pub(crate) fn budget_state(&self) -> BudgetState {
        self.budget
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
