#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::engine::{budgeted_categories, derive_budgets};
use crate::store::memory::MemoryStore;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
}

fn ledger_of(entries: &[(u32, &str, Decimal)]) -> Ledger {
    let mut ledger = Ledger::open(Box::new(MemoryStore::default()));
    for (d, category, amount) in entries {
        let ts = day(*d).and_hms_opt(14, 0, 0).unwrap();
        ledger.append_at(ts, category, *amount).unwrap();
    }
    ledger
}

#[test]
fn test_scenario_report() {
    let ledger = ledger_of(&[(1, "bills", dec!(16000)), (2, "travel", dec!(600))]);
    let config = derive_budgets(dec!(50000)).unwrap();
    let report = Report::build(&ledger, &config, day(2));

    assert_eq!(report.monthly_income, dec!(50000));
    assert_eq!(report.total_spent, dec!(16600));
    assert_eq!(report.spent_today, dec!(600));
    assert_eq!(report.projection.annual_income, dec!(600000));
    assert_eq!(report.projection.annual_saving, dec!(400800));
    assert!(!report.has_deficit());
    assert_eq!(report.record_count, 2);

    let names: Vec<&str> = report.categories.iter().map(|c| c.category).collect();
    assert_eq!(names, vec!["groceries", "entertainment", "bills"]);

    let bills = &report.categories[2];
    assert_eq!(bills.budget, dec!(15000));
    assert_eq!(bills.spent, dec!(16000));
    assert_eq!(bills.remaining, Decimal::ZERO);
    assert!(bills.over_budget);

    let groceries = &report.categories[0];
    assert_eq!(groceries.remaining, dec!(10000));
    assert!(!groceries.over_budget);

    let flagged: Vec<&str> = report.anomalies.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(flagged, vec!["bills", "travel"]);
}

#[test]
fn test_report_on_empty_ledger_undeclared() {
    let ledger = ledger_of(&[]);
    let config = BudgetConfig::undeclared(&budgeted_categories());
    let report = Report::build(&ledger, &config, day(1));

    assert_eq!(report.total_spent, Decimal::ZERO);
    assert_eq!(report.projection.annual_saving, Decimal::ZERO);
    assert!(report.anomalies.is_empty());
    assert!(report.categories.iter().all(|c| !c.over_budget));
}

#[test]
fn test_report_deficit() {
    let ledger = ledger_of(&[(1, "rent", dec!(900))]);
    let config = derive_budgets(dec!(500)).unwrap();
    let report = Report::build(&ledger, &config, day(1));
    assert_eq!(report.projection.annual_saving, dec!(-4800));
    assert!(report.has_deficit());
    assert!(report.anomalies.is_empty());
}

#[test]
fn test_used_ratio() {
    let status = |budget, spent| CategoryStatus {
        category: "bills",
        budget,
        spent,
        remaining: Decimal::ZERO,
        over_budget: false,
    };
    assert_eq!(status(dec!(100), dec!(25)).used_ratio(), 0.25);
    assert_eq!(status(dec!(100), dec!(250)).used_ratio(), 1.0);
    assert_eq!(status(Decimal::ZERO, dec!(10)).used_ratio(), 0.0);
}

#[test]
fn test_to_lines() {
    let ledger = ledger_of(&[(1, "bills", dec!(16000)), (2, "travel", dec!(600))]);
    let config = derive_budgets(dec!(50000)).unwrap();
    let lines = Report::build(&ledger, &config, day(2)).to_lines();

    assert!(lines.contains(&"Annual saving: 400,800.00 INR".to_string()));
    assert!(lines.contains(&"Groceries: 10,000.00 INR remaining, within budget".to_string()));
    assert!(lines.contains(&"Bills: 0.00 INR remaining, over budget".to_string()));
    assert!(lines.contains(&"Bad expenses (excluding rent and groceries):".to_string()));
    assert!(lines.contains(&"2. travel: 600.00 INR (2024-08-02 14:00:00)".to_string()));
}

#[test]
fn test_to_lines_no_anomalies() {
    let ledger = ledger_of(&[(1, "groceries", dec!(50))]);
    let config = derive_budgets(dec!(1000)).unwrap();
    let lines = Report::build(&ledger, &config, day(1)).to_lines();
    assert_eq!(lines.last().unwrap(), "  none");
}
