use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the tracker core. Every variant is a terminal outcome
/// for the single operation that produced it.
#[derive(Debug, Error)]
pub(crate) enum TrackerError {
    #[error("Invalid income: {0}")]
    InvalidIncome(String),
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Expense store unavailable ({}): {reason}", .path.display())]
    PersistenceUnavailable { path: PathBuf, reason: String },
}

impl TrackerError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::PersistenceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, TrackerError>;
