use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::tracker::Tracker;
use crate::ui::app::{App, FormKind, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(tracker: &mut Tracker) -> Result<()> {
    let mut app = App::new();
    app.refresh(tracker);
    if let Some(warning) = tracker.ledger().load_warning() {
        app.set_error(warning);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!("interactive session started");

    let result = run_app(&mut terminal, &mut app, tracker);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("interactive session failed: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tracker: &mut Tracker,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab bar + status bar + command bar + table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, tracker)?,
                InputMode::Command => handle_command_input(key, app, tracker)?,
                InputMode::Form => handle_form_input(key, app, tracker),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, tracker: &mut Tracker) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('i') => app.open_form(FormKind::Income),
        KeyCode::Char('e') => app.open_form(FormKind::Expense),
        KeyCode::Char('1') => switch_screen(app, tracker, Screen::Report),
        KeyCode::Char('2') => switch_screen(app, tracker, Screen::Expenses),
        KeyCode::Tab => cycle_screen(app, tracker, 1),
        KeyCode::BackTab => cycle_screen(app, tracker, Screen::all().len() - 1),
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => {
            if app.screen == Screen::Expenses {
                scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Expenses {
                let page = app.visible_rows.max(1);
                scroll_to_bottom(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    app.expenses.len(),
                    page,
                );
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App, tracker: &mut Tracker) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, tracker)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: KeyEvent, app: &mut App, tracker: &mut Tracker) {
    let Some(form) = app.form.as_mut() else {
        app.input_mode = InputMode::Normal;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.close_form();
            app.set_status("Cancelled");
        }
        KeyCode::Enter => {
            if form.on_last_field() {
                commands::submit_form(app, tracker);
            } else {
                form.next_field();
            }
        }
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) => {
            form.error = None;
            form.push_char(c);
        }
        _ => {}
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, tracker: &Tracker, screen: Screen) {
    app.screen = screen;
    app.refresh(tracker);
}

fn cycle_screen(app: &mut App, tracker: &Tracker, step: usize) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    switch_screen(app, tracker, screens[(idx + step) % screens.len()]);
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Expenses {
        let page = app.visible_rows.max(1);
        scroll_down(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.expenses.len(),
            page,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Expenses {
        scroll_up(&mut app.expense_index, &mut app.expense_scroll);
    }
}
