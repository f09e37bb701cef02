use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::LedgerStore;
use crate::error::{Result, TrackerError};
use crate::models::ExpenseRecord;

/// In-memory store for tests. Clones share state, so a test can keep a
/// handle after moving the store into a `Ledger`.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    saved: Rc<RefCell<Vec<ExpenseRecord>>>,
    saves: Rc<Cell<usize>>,
    fail_save: Rc<Cell<bool>>,
    fail_load: bool,
    fail_set_aside: bool,
    set_asides: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub(crate) fn with_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            saved: Rc::new(RefCell::new(records)),
            ..Self::default()
        }
    }

    pub(crate) fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    /// Load fails and the broken state cannot be moved aside either.
    pub(crate) fn stuck_failing_load() -> Self {
        Self {
            fail_load: true,
            fail_set_aside: true,
            ..Self::default()
        }
    }

    pub(crate) fn set_fail_save(&self, fail: bool) {
        self.fail_save.set(fail);
    }

    pub(crate) fn saved(&self) -> Vec<ExpenseRecord> {
        self.saved.borrow().clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub(crate) fn set_aside_count(&self) -> usize {
        self.set_asides.get()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Vec<ExpenseRecord>> {
        if self.fail_load {
            return Err(TrackerError::persistence("memory", "load disabled"));
        }
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, records: &[ExpenseRecord]) -> Result<()> {
        if self.fail_save.get() {
            return Err(TrackerError::persistence("memory", "save disabled"));
        }
        *self.saved.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn set_aside(&self) -> Result<Option<String>> {
        if self.fail_set_aside {
            return Err(TrackerError::persistence("memory", "set aside disabled"));
        }
        self.set_asides.set(self.set_asides.get() + 1);
        Ok(self.fail_load.then(|| "memory.corrupt".to_string()))
    }

    fn location(&self) -> String {
        "memory".into()
    }
}
