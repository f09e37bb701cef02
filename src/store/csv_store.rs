use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::LedgerStore;
use crate::error::{Result, TrackerError};
use crate::input::MAX_AMOUNT;
use crate::models::{ExpenseRecord, TIMESTAMP_FORMAT};

const HEADER: [&str; 3] = ["timestamp", "category", "amount"];
const TMP_SUFFIX: &str = "tmp";
const CORRUPT_SUFFIX: &str = "corrupt";

/// Ledger kept as a headed CSV file: `timestamp,category,amount`.
pub(crate) struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn unavailable(&self, reason: impl ToString) -> TrackerError {
        TrackerError::persistence(&self.path, reason)
    }
}

impl LedgerStore for CsvStore {
    fn load(&self) -> Result<Vec<ExpenseRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| self.unavailable(e))?;

        let headers = rdr.headers().map_err(|e| self.unavailable(e))?;
        if !headers.iter().map(str::trim).eq(HEADER.iter().copied()) {
            return Err(self.unavailable(format!(
                "unexpected header '{}'",
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = result.map_err(|e| self.unavailable(e))?;
            // +2: one for the header, one for 1-based numbering
            let record = parse_row(&row)
                .map_err(|reason| self.unavailable(format!("row {}: {reason}", i + 2)))?;
            records.push(record);
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "read expense file");
        Ok(records)
    }

    fn save(&self, records: &[ExpenseRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        let tmp = tmp_path(&self.path);
        let written = write_file(&tmp, records)
            .map_err(|e| e.to_string())
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(|e| e.to_string()));
        if let Err(reason) = written {
            if tmp.exists() {
                if let Err(e) = fs::remove_file(&tmp) {
                    tracing::warn!(path = %tmp.display(), error = %e, "could not remove temp file");
                }
            }
            return Err(self.unavailable(reason));
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "wrote expense file");
        Ok(())
    }

    fn set_aside(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let target = corrupt_path(&self.path);
        fs::rename(&self.path, &target).map_err(|e| self.unavailable(e))?;
        tracing::warn!(
            from = %self.path.display(),
            to = %target.display(),
            "moved unreadable expense file aside"
        );
        Ok(Some(target.display().to_string()))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_row(row: &csv::StringRecord) -> std::result::Result<ExpenseRecord, String> {
    let field = |index: usize, name: &str| row.get(index).ok_or_else(|| format!("missing {name}"));

    let raw_timestamp = field(0, "timestamp")?.trim();
    let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT)
        .map_err(|_| format!("invalid timestamp '{raw_timestamp}'"))?;

    let category = field(1, "category")?.to_string();
    if category.trim().is_empty() {
        return Err("empty category".into());
    }

    let raw_amount = field(2, "amount")?.trim();
    let amount =
        Decimal::from_str(raw_amount).map_err(|_| format!("invalid amount '{raw_amount}'"))?;
    if amount <= Decimal::ZERO {
        return Err(format!("amount '{raw_amount}' is not positive"));
    }
    if amount > MAX_AMOUNT {
        return Err(format!("amount '{raw_amount}' is out of range"));
    }

    Ok(ExpenseRecord::new(timestamp, category, amount))
}

fn write_file(path: &Path, records: &[ExpenseRecord]) -> std::result::Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record([
            record.timestamp_text(),
            record.category.clone(),
            record.amount.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// First free `<file>.corrupt`, `<file>.corrupt.1`, ... next to `path`, so an
/// earlier set-aside copy is never replaced.
fn corrupt_path(path: &Path) -> PathBuf {
    let base = format!("{}.{CORRUPT_SUFFIX}", path.display());
    let mut candidate = PathBuf::from(&base);
    let mut n = 1;
    while candidate.exists() {
        candidate = PathBuf::from(format!("{base}.{n}"));
        n += 1;
    }
    candidate
}
