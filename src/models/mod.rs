mod budget;
mod expense;

pub(crate) use budget::{BudgetConfig, BudgetState};
pub(crate) use expense::{ExpenseRecord, TIMESTAMP_FORMAT};
