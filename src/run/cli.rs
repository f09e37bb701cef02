use anyhow::{Context, Result};
use chrono::Local;

use crate::error::TrackerError;
use crate::format::format_amount;
use crate::tracker::Tracker;

pub(crate) fn as_cli(args: &[String], tracker: &mut Tracker) -> Result<()> {
    tracing::debug!(command = %args[1], "cli invoked");
    if let Some(warning) = tracker.ledger().load_warning() {
        eprintln!("Warning: {warning}");
    }
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], tracker),
        "report" | "r" => cli_report(&args[2..], tracker),
        "list" | "ls" => cli_list(tracker),
        "today" => cli_today(tracker),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("fintrack - local-only personal expense and budget tracker");
    println!();
    println!("Usage: fintrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <category> <amount>       Record an expense");
    println!("  report                        Print the spending report");
    println!("    --income <amount>           Monthly income to budget against");
    println!("  list                          List all recorded expenses");
    println!("  today                         Print today's spending");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_add(args: &[String], tracker: &mut Tracker) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: fintrack add <category> <amount>");
    }

    // Last argument is the amount, everything before is the category
    let (amount, category) = args
        .split_last()
        .ok_or_else(|| anyhow::anyhow!("Usage: fintrack add <category> <amount>"))?;
    let category = category.join(" ");

    match tracker.record_expense(&category, amount) {
        Ok(record) => {
            println!(
                "Recorded {}: {} at {}",
                record.category,
                format_amount(record.amount),
                record.timestamp_text()
            );
            Ok(())
        }
        Err(e @ TrackerError::PersistenceUnavailable { .. }) => {
            Err(e).context("Expense was not saved")
        }
        Err(e) => Err(e.into()),
    }
}

fn cli_report(args: &[String], tracker: &mut Tracker) -> Result<()> {
    let income = args
        .windows(2)
        .find(|w| w[0] == "--income")
        .map(|w| w[1].as_str());

    if let Some(text) = income {
        tracker.declare_income(text)?;
    } else if args.iter().any(|a| a == "--income") {
        anyhow::bail!("Usage: fintrack report [--income <amount>]");
    }

    let report = tracker.report(Local::now().date_naive());
    println!("fintrack report ({})", tracker.budget_state());
    println!("{}", "─".repeat(40));
    for line in report.to_lines() {
        println!("{line}");
    }
    Ok(())
}

fn cli_list(tracker: &Tracker) -> Result<()> {
    if tracker.ledger().is_empty() {
        println!("No expenses");
        return Ok(());
    }

    println!("{:<20} {:<24} {:>20}", "Timestamp", "Category", "Amount");
    println!("{}", "─".repeat(66));
    let records = tracker.ledger().records();
    for record in records {
        println!(
            "{:<20} {:<24} {:>20}",
            record.timestamp_text(),
            record.category,
            format_amount(record.amount),
        );
    }
    println!("{}", "─".repeat(66));
    println!(
        "{} expenses, {} total ({})",
        records.len(),
        format_amount(tracker.ledger().total_spent()),
        tracker.ledger().location()
    );
    Ok(())
}

fn cli_today(tracker: &Tracker) -> Result<()> {
    let today = Local::now().date_naive();
    println!(
        "Spent today ({today}): {}",
        format_amount(tracker.ledger().spent_today(today))
    );
    Ok(())
}
