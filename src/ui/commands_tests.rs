#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, FormKind, InputMode, Screen};
use super::commands::*;
use crate::ledger::Ledger;
use crate::models::BudgetState;
use crate::store::memory::MemoryStore;
use crate::tracker::Tracker;

fn setup() -> (App, Tracker, MemoryStore) {
    let store = MemoryStore::default();
    let tracker = Tracker::new(Ledger::open(Box::new(store.clone())));
    let mut app = App::new();
    app.refresh(&tracker);
    (app, tracker, store)
}

#[test]
fn test_quit_command() {
    let (mut app, mut tracker, _) = setup();
    handle_command("quit", &mut app, &mut tracker).unwrap();
    assert!(!app.running);
}

#[test]
fn test_screen_commands() {
    let (mut app, mut tracker, _) = setup();
    handle_command("expenses", &mut app, &mut tracker).unwrap();
    assert_eq!(app.screen, Screen::Expenses);
    handle_command("r", &mut app, &mut tracker).unwrap();
    assert_eq!(app.screen, Screen::Report);
}

#[test]
fn test_unknown_command_suggests() {
    let (mut app, mut tracker, _) = setup();
    handle_command("incme", &mut app, &mut tracker).unwrap();
    assert!(app.status_is_error);
    assert!(app.status_message.contains("Did you mean :income?"));
}

#[test]
fn test_income_command_with_args() {
    let (mut app, mut tracker, _) = setup();
    handle_command("income 50000", &mut app, &mut tracker).unwrap();
    assert_eq!(
        tracker.budget_state(),
        BudgetState::Declared {
            monthly_income: dec!(50000)
        }
    );
    assert_eq!(app.report.monthly_income, dec!(50000));
    assert!(!app.status_is_error);
}

#[test]
fn test_invalid_income_leaves_state() {
    let (mut app, mut tracker, _) = setup();
    handle_command("income -5", &mut app, &mut tracker).unwrap();
    assert_eq!(tracker.budget_state(), BudgetState::Undeclared);
    assert!(app.status_is_error);
    assert!(app.status_message.starts_with("Invalid income"));
}

#[test]
fn test_expense_command_splits_last_token() {
    let (mut app, mut tracker, store) = setup();
    handle_command("expense eating out 450", &mut app, &mut tracker).unwrap();
    assert_eq!(app.expenses.len(), 1);
    assert_eq!(app.expenses[0].category, "eating out");
    assert_eq!(app.expenses[0].amount, dec!(450));
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_expense_command_usage() {
    let (mut app, mut tracker, store) = setup();
    handle_command("expense 450", &mut app, &mut tracker).unwrap();
    assert!(app.status_is_error);
    assert!(app.status_message.starts_with("Usage"));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_commands_without_args_open_forms() {
    let (mut app, mut tracker, _) = setup();
    handle_command("i", &mut app, &mut tracker).unwrap();
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.form.as_ref().unwrap().kind, FormKind::Income);

    app.close_form();
    handle_command("e", &mut app, &mut tracker).unwrap();
    let form = app.form.as_ref().unwrap();
    assert_eq!(form.kind, FormKind::Expense);
    assert_eq!(form.fields.len(), 2);
}

#[test]
fn test_submit_expense_form() {
    let (mut app, mut tracker, _) = setup();
    app.open_form(FormKind::Expense);
    for c in "travel".chars() {
        app.form.as_mut().unwrap().push_char(c);
    }
    app.form.as_mut().unwrap().next_field();
    for c in "600".chars() {
        app.form.as_mut().unwrap().push_char(c);
    }

    submit_form(&mut app, &mut tracker);
    assert!(app.form.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(tracker.ledger().len(), 1);
    assert_eq!(app.report.total_spent, dec!(600));
}

#[test]
fn test_submit_invalid_form_keeps_it_open() {
    let (mut app, mut tracker, _) = setup();
    app.open_form(FormKind::Expense);
    app.form.as_mut().unwrap().push_char('x');
    app.form.as_mut().unwrap().next_field();
    app.form.as_mut().unwrap().push_char('0');

    submit_form(&mut app, &mut tracker);
    let form = app.form.as_ref().unwrap();
    assert!(form.error.as_deref().unwrap().starts_with("Invalid expense"));
    assert!(tracker.ledger().is_empty());
}

#[test]
fn test_failed_save_is_reported_but_kept() {
    let (mut app, mut tracker, store) = setup();
    store.set_fail_save(true);
    handle_command("expense bills 100", &mut app, &mut tracker).unwrap();
    assert!(app.status_is_error);
    assert!(app.status_message.contains("not saved"));
    assert_eq!(app.expenses.len(), 1);
}

#[test]
fn test_today_command() {
    let (mut app, mut tracker, _) = setup();
    handle_command("expense snacks 40", &mut app, &mut tracker).unwrap();
    handle_command("today", &mut app, &mut tracker).unwrap();
    assert_eq!(app.status_message, "Spent today: 40.00 INR");
}

#[test]
fn test_form_focus_wraps() {
    let (mut app, _, _) = setup();
    app.open_form(FormKind::Expense);
    let form = app.form.as_mut().unwrap();
    form.prev_field();
    assert_eq!(form.focus, 1);
    assert!(form.on_last_field());
    form.next_field();
    assert_eq!(form.focus, 0);
    form.push_char('a');
    form.push_char('b');
    form.pop_char();
    assert_eq!(form.value(0), "a");
}

#[test]
fn test_every_command_has_description() {
    for (name, cmd) in COMMANDS.iter() {
        assert!(!cmd.description.is_empty(), "{name} missing description");
    }
}
