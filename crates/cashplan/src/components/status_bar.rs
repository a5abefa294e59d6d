use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use cashplan_core::PaymentMode;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> String {
        if state.editing.is_some() {
            return "type value | Enter: apply | Esc: cancel".to_string();
        }
        let tab_help = match state.active_tab {
            TabId::Dashboard => "j/k: field | Enter: edit",
            TabId::Ledger => "j/k: scroll | g/G: top/bottom",
            TabId::Chart => "balances over the projection window",
        };
        let mode = match state.mode {
            PaymentMode::Fixed => "fixed payments",
            PaymentMode::StatementMinimum => "statement minimums",
        };
        format!(
            "1-3: tabs | {tab_help} | m: mode ({mode}) | +/-: horizon ({}mo) | Ctrl+S: save | q: quit",
            state.horizon_months
        )
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else {
            let mut spans = vec![Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            )];
            if state.dirty {
                spans.push(Span::styled(
                    "  [unsaved]",
                    Style::default().fg(Color::Yellow),
                ));
            }
            Line::from(spans)
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
