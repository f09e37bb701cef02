mod config;
mod engine;
mod error;
mod format;
mod input;
mod ledger;
mod logging;
mod models;
mod report;
mod run;
mod store;
mod tracker;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let paths = config::AppPaths::resolve()?;
    logging::init(&paths.log_file())?;
    tracing::debug!(data_dir = %paths.data_dir().display(), "resolved data directory");

    let store = store::CsvStore::new(paths.ledger_file());
    let ledger = ledger::Ledger::open(Box::new(store));
    let mut tracker = tracker::Tracker::new(ledger);

    match args.len() {
        1 => run::as_tui(&mut tracker),
        2.. => run::as_cli(&args, &mut tracker),
        _ => {
            eprintln!("Usage: fintrack [command]");
            Ok(())
        }
    }
}
