use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;

/// Text form of a record timestamp, e.g. "2024-01-15 09:30:00".
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single recorded expense. Identity is its position in the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseRecord {
    pub(crate) timestamp: NaiveDateTime,
    pub(crate) category: String,
    pub(crate) amount: Decimal,
}

impl ExpenseRecord {
    /// Timestamps keep second precision only.
    pub(crate) fn new(timestamp: NaiveDateTime, category: String, amount: Decimal) -> Self {
        Self {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            category,
            amount,
        }
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub(crate) fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
