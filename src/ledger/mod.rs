use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::{Result, TrackerError};
use crate::models::ExpenseRecord;
use crate::store::LedgerStore;

/// Append-only, insertion-ordered list of expenses, written through to its
/// store in full on every append.
pub(crate) struct Ledger {
    records: Vec<ExpenseRecord>,
    store: Box<dyn LedgerStore>,
    /// Set when the store could not be read at open.
    load_warning: Option<String>,
    /// The unreadable store is still in place, so saving would destroy it.
    save_blocked: bool,
}

impl Ledger {
    /// Loads the ledger from `store`. An unreadable store is not fatal: it is
    /// moved aside, the ledger starts empty and `load_warning` says why. If
    /// it cannot be moved, saves are refused rather than overwrite it.
    pub(crate) fn open(store: Box<dyn LedgerStore>) -> Self {
        let mut ledger = Self {
            records: Vec::new(),
            store,
            load_warning: None,
            save_blocked: false,
        };

        match ledger.store.load() {
            Ok(records) => {
                tracing::info!(
                    location = %ledger.store.location(),
                    count = records.len(),
                    "loaded expense ledger"
                );
                ledger.records = records;
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load expense ledger, starting empty");
                let warning = match ledger.store.set_aside() {
                    Ok(Some(moved)) => {
                        format!("{e}. Starting empty; the unreadable file was moved to {moved}")
                    }
                    Ok(None) => format!("{e}. Starting empty"),
                    Err(aside) => {
                        tracing::error!(error = %aside, "could not move unreadable ledger aside");
                        ledger.save_blocked = true;
                        format!("{e}. Starting empty; new expenses will not be saved ({aside})")
                    }
                };
                ledger.load_warning = Some(warning);
            }
        }
        ledger
    }

    /// Records an expense stamped with the current local time.
    pub(crate) fn append(&mut self, category: &str, amount: Decimal) -> Result<ExpenseRecord> {
        self.append_at(Local::now().naive_local(), category, amount)
    }

    /// Pushes the record, then rewrites the store. A failed write leaves the
    /// record in memory and returns the error: the caller must surface it.
    pub(crate) fn append_at(
        &mut self,
        timestamp: NaiveDateTime,
        category: &str,
        amount: Decimal,
    ) -> Result<ExpenseRecord> {
        let record = ExpenseRecord::new(timestamp, category.to_string(), amount);
        self.records.push(record.clone());

        if self.save_blocked {
            tracing::error!(
                category = %record.category,
                amount = %record.amount,
                "expense kept in memory, unreadable ledger file still in place"
            );
            return Err(TrackerError::persistence(
                self.store.location(),
                "the existing file could not be read and was not overwritten",
            ));
        }

        if let Err(e) = self.store.save(&self.records) {
            tracing::error!(
                error = %e,
                category = %record.category,
                amount = %record.amount,
                "expense recorded in memory but not persisted"
            );
            return Err(e);
        }

        tracing::info!(
            category = %record.category,
            amount = %record.amount,
            count = self.records.len(),
            "expense recorded"
        );
        Ok(record)
    }

    pub(crate) fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn location(&self) -> String {
        self.store.location()
    }

    /// Why the ledger started empty, if the store could not be read.
    pub(crate) fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub(crate) fn total_spent(&self) -> Decimal {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Exact, case-sensitive category match.
    pub(crate) fn spent_by_category(&self, category: &str) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.amount)
            .sum()
    }

    /// Compares the date part only; time of day is ignored.
    pub(crate) fn spent_today(&self, as_of: NaiveDate) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.date() == as_of)
            .map(|r| r.amount)
            .sum()
    }
}
