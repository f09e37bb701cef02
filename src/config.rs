use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Overrides the platform data directory when set to a non-empty path.
pub(crate) const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

const LEDGER_FILE: &str = "expenses.csv";
const LOG_FILE: &str = "fintrack.log";

/// Where fintrack keeps its files.
#[derive(Debug, Clone)]
pub(crate) struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    pub(crate) fn resolve() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => directories::ProjectDirs::from("com", "fintrack", "fintrack")
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
                .data_dir()
                .to_path_buf(),
        };
        Self::at(data_dir)
    }

    /// Uses `data_dir` as-is, creating it if needed.
    pub(crate) fn at(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self { data_dir })
    }

    pub(crate) fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub(crate) fn ledger_file(&self) -> PathBuf {
        self.data_dir.join(LEDGER_FILE)
    }

    pub(crate) fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
