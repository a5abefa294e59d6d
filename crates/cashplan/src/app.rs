use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, balance_chart::BalanceChart, ledger_table::LedgerTable,
    status_bar::StatusBar, summary_panel::SummaryPanel, tab_bar::TabBar,
    upcoming_panel::UpcomingPanel,
};
use crate::data::snapshot::BalanceSnapshot;
use crate::data::storage::DataDirectory;
use crate::state::{AppState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            tab_bar: TabBar,
            status_bar: StatusBar::new(),
        }
    }

    /// Create app with a data directory path, loading persisted rules.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let storage = DataDirectory::new(data_dir.clone());
        let state = match storage.load() {
            Ok(data) => AppState::from_app_data(data, data_dir),
            Err(e) => {
                eprintln!("Warning: Failed to load from {:?}: {}", data_dir, e);
                eprintln!("Starting with default configuration.");
                let mut state = AppState::default();
                state.data_dir = Some(data_dir);
                state
            }
        };

        Self {
            state,
            tab_bar: TabBar,
            status_bar: StatusBar::new(),
        }
    }

    /// Overwrite starting balances from an imported snapshot.
    pub fn import_snapshot(&mut self, snapshot: &BalanceSnapshot) {
        snapshot.apply(&mut self.state.rules);
        self.state.mark_modified();
    }

    pub fn set_horizon(&mut self, months: u32) {
        self.state.horizon_months = months.clamp(1, 120);
        self.state.recompute();
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        if self.state.dirty {
            eprintln!("Exiting with unsaved rule changes (Ctrl+S saves)");
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_tab(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_tab(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Dashboard => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(area);
                SummaryPanel::render(frame, columns[0], &self.state);
                UpcomingPanel::render(frame, columns[1], &self.state);
            }
            TabId::Ledger => LedgerTable::render(frame, area, &self.state),
            TabId::Chart => BalanceChart::render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // An active inline edit captures everything except Ctrl+C
        if self.state.editing.is_some() {
            self.handle_edit_key(key_event);
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('s') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Err(e) = self.state.save() {
                    self.state.set_error(format!("Failed to save: {}", e));
                }
                return;
            }
            KeyCode::Char('m') => {
                self.state.toggle_mode();
                return;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.state.adjust_horizon(1);
                return;
            }
            KeyCode::Char('-') => {
                self.state.adjust_horizon(-1);
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        match self.state.active_tab {
            TabId::Dashboard => self.handle_dashboard_key(key_event),
            TabId::Ledger => self.handle_ledger_key(key_event),
            TabId::Chart => {}
        }
    }

    fn handle_edit_key(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.state.exit = true;
            return;
        }

        match key_event.code {
            KeyCode::Enter => self.state.commit_edit(),
            KeyCode::Esc => self.state.cancel_edit(),
            KeyCode::Backspace => {
                if let Some(buffer) = self.state.editing.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                if let Some(buffer) = self.state.editing.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next_field(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_field(),
            KeyCode::Enter => self.state.begin_edit(),
            _ => {}
        }
    }

    fn handle_ledger_key(&mut self, key_event: KeyEvent) {
        let max_scroll = self.state.projection.len().saturating_sub(1);
        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.ledger_scroll = (self.state.ledger_scroll + 1).min(max_scroll);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.ledger_scroll = self.state.ledger_scroll.saturating_sub(1);
            }
            KeyCode::Char('g') => self.state.ledger_scroll = 0,
            KeyCode::Char('G') => self.state.ledger_scroll = max_scroll,
            KeyCode::PageDown => {
                self.state.ledger_scroll = (self.state.ledger_scroll + 14).min(max_scroll);
            }
            KeyCode::PageUp => {
                self.state.ledger_scroll = self.state.ledger_scroll.saturating_sub(14);
            }
            _ => {}
        }
    }
}
