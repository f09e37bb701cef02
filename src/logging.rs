use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, Once};

/// Filter directives, e.g. `FINTRACK_LOG=fintrack=debug`.
pub(crate) const LOG_ENV: &str = "FINTRACK_LOG";
const DEFAULT_FILTER: &str = "fintrack=info";

static INIT_TRACING: Once = Once::new();

/// Sends tracing output to `log_path`. The terminal belongs to the UI, so
/// nothing is logged to stdout or stderr. Only the first call has effect.
pub(crate) fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let mut installed = Ok(());
    INIT_TRACING.call_once(|| installed = install(file));
    installed?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fintrack started");
    Ok(())
}

fn install(file: File) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    #[test]
    fn test_init_twice_is_harmless() {
        let temp = tempfile::TempDir::new().unwrap();
        let log = temp.path().join("fintrack.log");
        // Another test may own the global subscriber already.
        let _ = super::init(&log);
        super::init(&log).unwrap();
        assert!(log.exists());
    }

    #[test]
    fn test_init_reports_unopenable_log() {
        let temp = tempfile::TempDir::new().unwrap();
        let log = temp.path().join("missing").join("fintrack.log");
        assert!(super::init(&log).is_err());
    }

    #[test]
    fn test_second_subscriber_is_reported() {
        let temp = tempfile::TempDir::new().unwrap();
        let open = || std::fs::File::create(temp.path().join("fintrack.log")).unwrap();
        // The first install may already have happened in another test.
        let _ = super::install(open());
        let err = super::install(open()).unwrap_err();
        assert!(err.to_string().contains("log subscriber"), "{err}");
    }
}
