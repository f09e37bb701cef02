use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::format::{capitalize, format_amount};
use crate::report::CategoryStatus;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{progress_bar, truncate};

const BAR_WIDTH: usize = 20;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Length(5), // Budgets (one line per category + borders)
            Constraint::Min(5),    // Bad expenses
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_budgets(f, chunks[1], app);
    render_anomalies(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let report = &app.report;
    let income_note = if app.budget_state.is_declared() {
        String::from("declared")
    } else {
        String::from("press i to declare")
    };
    let saving = report.projection.annual_saving;

    render_card(
        f,
        cards[0],
        "Monthly Income",
        report.monthly_income,
        theme::GREEN,
        income_note,
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        report.total_spent,
        theme::RED,
        format!("{} records", report.record_count),
    );
    render_card(
        f,
        cards[2],
        "Spent Today",
        report.spent_today,
        theme::YELLOW,
        String::new(),
    );
    render_card(
        f,
        cards[3],
        "Annual Saving",
        saving,
        if report.has_deficit() {
            theme::RED
        } else {
            theme::GREEN
        },
        format!("of {}", format_amount(report.projection.annual_income)),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Decimal, color: Color, sub: String) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub, theme::dim_style())),
    ])
    .centered()
    .block(theme::panel(title));

    f.render_widget(text, area);
}

fn render_budgets(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .report
        .categories
        .iter()
        .map(|status| ListItem::new(budget_line(status)))
        .collect();

    f.render_widget(List::new(items).block(theme::panel("Budgets")), area);
}

fn budget_line(status: &CategoryStatus) -> Line<'static> {
    let style = if status.over_budget {
        theme::over_budget_style()
    } else {
        theme::within_budget_style()
    };

    Line::from(vec![
        Span::styled(
            format!(" {:<14}", capitalize(status.category)),
            theme::normal_style(),
        ),
        Span::styled(progress_bar(status.used_ratio(), BAR_WIDTH), style),
        Span::styled(
            format!(
                " {} of {} spent, {} remaining, ",
                format_amount(status.spent),
                format_amount(status.budget),
                format_amount(status.remaining)
            ),
            theme::dim_style(),
        ),
        Span::styled(status.label(), style.add_modifier(Modifier::BOLD)),
    ])
}

fn render_anomalies(f: &mut Frame, area: Rect, app: &App) {
    let block = theme::panel(format!(
        "Bad expenses (excluding rent and groceries) ({})",
        app.report.anomalies.len()
    ));

    if app.report.anomalies.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No bad expenses", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .report
        .anomalies
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, record)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:>3}. ", i + 1), theme::dim_style()),
                Span::styled(
                    format!("{:<20}", truncate(&record.category, 20)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:>20}", format_amount(record.amount)),
                    theme::over_budget_style(),
                ),
                Span::styled(format!("  {}", record.timestamp_text()), theme::dim_style()),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
