use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::engine;
use crate::format::format_amount;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.expenses.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses recorded yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press e or use :expense <category> <amount>",
                theme::dim_style(),
            )),
        ];
        f.render_widget(
            Paragraph::new(msg)
                .centered()
                .block(theme::panel("Expenses (0)")),
            area,
        );
        return;
    }

    let header_cells = ["Timestamp", "Category", "Amount", ""]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let income = app.budget_state.monthly_income();

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, record)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let flag = if engine::is_anomalous(record, income) {
                Span::styled("bad", theme::over_budget_style())
            } else {
                Span::raw("")
            };

            Row::new(vec![
                Cell::from(record.timestamp_text()),
                Cell::from(truncate(&record.category, 30)),
                Cell::from(format_amount(record.amount)),
                Cell::from(flag),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(21),
        Constraint::Min(20),
        Constraint::Length(22),
        Constraint::Length(5),
    ];

    let title = format!(
        "Expenses ({}) total {} | {}",
        app.expenses.len(),
        format_amount(app.report.total_spent),
        app.ledger_location
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::panel(title));

    f.render_widget(table, area);
}
