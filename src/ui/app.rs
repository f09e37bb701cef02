use chrono::Local;

use crate::models::{BudgetState, ExpenseRecord};
use crate::report::Report;
use crate::tracker::Tracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Report,
    Expenses,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Report, Self::Expenses]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Report => write!(f, "Report"),
            Self::Expenses => write!(f, "Expenses"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "INPUT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormKind {
    Income,
    Expense,
}

#[derive(Debug, Clone)]
pub(crate) struct FormField {
    pub(crate) label: &'static str,
    pub(crate) value: String,
}

/// A small popup form. Values are raw text; validation happens on submit.
#[derive(Debug, Clone)]
pub(crate) struct Form {
    pub(crate) kind: FormKind,
    pub(crate) fields: Vec<FormField>,
    pub(crate) focus: usize,
    /// Validation message from the last rejected submit.
    pub(crate) error: Option<String>,
}

impl Form {
    pub(crate) fn new(kind: FormKind) -> Self {
        let labels: &[&'static str] = match kind {
            FormKind::Income => &["Monthly income (INR)"],
            FormKind::Expense => &["Expense category", "Expense amount"],
        };
        Self {
            kind,
            fields: labels
                .iter()
                .map(|&label| FormField {
                    label,
                    value: String::new(),
                })
                .collect(),
            focus: 0,
            error: None,
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self.kind {
            FormKind::Income => "Input Monthly Income",
            FormKind::Expense => "Record Expense",
        }
    }

    pub(crate) fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", |f| f.value.as_str())
    }

    pub(crate) fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
        }
    }

    pub(crate) fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len().max(1);
    }

    pub(crate) fn prev_field(&mut self) {
        let len = self.fields.len().max(1);
        self.focus = (self.focus + len - 1) % len;
    }

    pub(crate) fn on_last_field(&self) -> bool {
        self.focus + 1 >= self.fields.len()
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) status_is_error: bool,
    pub(crate) show_help: bool,
    pub(crate) form: Option<Form>,

    // Report
    pub(crate) report: Report,
    pub(crate) budget_state: BudgetState,

    // Expenses
    pub(crate) expenses: Vec<ExpenseRecord>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) ledger_location: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Report,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            status_is_error: false,
            show_help: false,
            form: None,

            report: Report::default(),
            budget_state: BudgetState::Undeclared,

            expenses: Vec::new(),
            expense_index: 0,
            expense_scroll: 0,
            ledger_location: String::new(),

            visible_rows: 20,
        }
    }

    /// Recomputes everything shown from the tracker's current state.
    pub(crate) fn refresh(&mut self, tracker: &Tracker) {
        self.report = tracker.report(Local::now().date_naive());
        self.budget_state = tracker.budget_state();
        self.expenses = tracker.ledger().records().to_vec();
        self.ledger_location = tracker.ledger().location();
        if self.expense_index >= self.expenses.len() {
            self.expense_index = self.expenses.len().saturating_sub(1);
        }
    }

    pub(crate) fn open_form(&mut self, kind: FormKind) {
        self.form = Some(Form::new(kind));
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn close_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = false;
    }

    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = true;
    }

    pub(crate) fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_is_error = false;
    }
}
