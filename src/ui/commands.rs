use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, FormKind, Screen};
use crate::error::TrackerError;
use crate::format::format_amount;
use crate::tracker::Tracker;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Tracker) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit fintrack", cmd_quit, r);
    register_command!("quit", "Quit fintrack", cmd_quit, r);
    register_command!("r", "Go to Report", cmd_report, r);
    register_command!("report", "Go to Report", cmd_report, r);
    register_command!("ls", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!(
        "income",
        "Declare monthly income (e.g. :income 50000)",
        cmd_income,
        r
    );
    register_command!("i", "Declare monthly income (e.g. :i 50000)", cmd_income, r);
    register_command!(
        "expense",
        "Record an expense (e.g. :expense groceries 250)",
        cmd_expense,
        r
    );
    register_command!(
        "e",
        "Record an expense (e.g. :e groceries 250)",
        cmd_expense,
        r
    );
    register_command!("today", "Show today's spending", cmd_today, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, tracker)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_error(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Tracker actions ──────────────────────────────────────────
//
// Shared by the commands and the popup forms. Validation errors are handed
// back untouched; a failed save still refreshes the view because the record
// was kept in memory.

pub(crate) fn declare_income(
    text: &str,
    app: &mut App,
    tracker: &mut Tracker,
) -> Result<(), TrackerError> {
    let income = tracker.declare_income(text)?;
    app.refresh(tracker);
    app.set_status(format!("Monthly income set to {}", format_amount(income)));
    Ok(())
}

pub(crate) fn record_expense(
    category: &str,
    amount: &str,
    app: &mut App,
    tracker: &mut Tracker,
) -> Result<(), TrackerError> {
    match tracker.record_expense(category, amount) {
        Ok(record) => {
            app.refresh(tracker);
            app.set_status(format!(
                "Recorded {}: {}",
                record.category,
                format_amount(record.amount)
            ));
            Ok(())
        }
        Err(e @ TrackerError::PersistenceUnavailable { .. }) => {
            app.refresh(tracker);
            app.set_error(format!("Expense recorded but not saved. {e}"));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Submits the open form. On a validation error the form stays open with the
/// message attached.
pub(crate) fn submit_form(app: &mut App, tracker: &mut Tracker) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let kind = form.kind;
    let first = form.value(0).to_string();
    let second = form.value(1).to_string();

    let result = match kind {
        FormKind::Income => declare_income(&first, app, tracker),
        FormKind::Expense => record_expense(&first, &second, app, tracker),
    };

    match result {
        Ok(()) => app.close_form(),
        Err(e) => {
            if let Some(form) = app.form.as_mut() {
                form.error = Some(e.to_string());
            }
        }
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_report(_args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    app.screen = Screen::Report;
    app.refresh(tracker);
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    app.refresh(tracker);
    Ok(())
}

fn cmd_income(args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_form(FormKind::Income);
        return Ok(());
    }

    if let Err(e) = declare_income(args, app, tracker) {
        app.set_error(e.to_string());
    }
    Ok(())
}

fn cmd_expense(args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_form(FormKind::Expense);
        return Ok(());
    }

    // Last token is the amount, everything before is the category
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_error("Usage: :expense <category> <amount>");
        return Ok(());
    }

    if let Err(e) = record_expense(parts[1], parts[0], app, tracker) {
        app.set_error(e.to_string());
    }
    Ok(())
}

fn cmd_today(_args: &str, app: &mut App, tracker: &mut Tracker) -> anyhow::Result<()> {
    app.refresh(tracker);
    app.set_status(format!(
        "Spent today: {}",
        format_amount(app.report.spent_today)
    ));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _tracker: &mut Tracker) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
