mod csv_store;
#[cfg(test)]
pub(crate) mod memory;

pub(crate) use csv_store::CsvStore;

use crate::error::Result;
use crate::models::ExpenseRecord;

/// Durable home of the ledger. Every save replaces the whole representation;
/// there are no partial or delta writes.
pub(crate) trait LedgerStore {
    /// Missing durable state loads as an empty ledger, not an error.
    fn load(&self) -> Result<Vec<ExpenseRecord>>;
    fn save(&self, records: &[ExpenseRecord]) -> Result<()>;
    /// Moves unreadable durable state out of the way so a later save cannot
    /// overwrite it. Returns where it went, `None` if there was nothing to move.
    fn set_aside(&self) -> Result<Option<String>>;
    /// Human-readable location for logs and status messages.
    fn location(&self) -> String;
}
