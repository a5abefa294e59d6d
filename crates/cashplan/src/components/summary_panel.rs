//! Account summary and inline rule editing.
//!
//! The left side of the dashboard: headline balances now vs. end of window,
//! the next payday, and the full list of editable rule fields. The selected
//! field edits inline; committing a value reruns the whole projection.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use cashplan_core::{PaymentMode, schedule};

use crate::state::{AppState, RuleField};
use crate::util::format::format_currency;

pub struct SummaryPanel;

impl SummaryPanel {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        Self::render_summary(frame, chunks[0], state);
        Self::render_fields(frame, chunks[1], state);
    }

    fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" SUMMARY ");

        let Some(last) = state.projection.final_record() else {
            frame.render_widget(Paragraph::new("No projection").block(block), area);
            return;
        };

        let checking_now = state.rules.checking_balance;
        let debt_now = state.rules.card_balances.total();
        let next_payday = schedule::next_payday(state.today, state.rules.payday_reference);

        let balance_style = |value: f64| {
            if value < 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            }
        };

        let mode_label = match state.mode {
            PaymentMode::Fixed => "fixed payments",
            PaymentMode::StatementMinimum => "statement minimums",
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw("Checking   "),
                Span::styled(format_currency(checking_now), balance_style(checking_now)),
                Span::raw("  ->  "),
                Span::styled(format_currency(last.checking), balance_style(last.checking)),
            ]),
            Line::from(vec![
                Span::raw("Card debt  "),
                Span::styled(format_currency(debt_now), Style::default().fg(Color::Magenta)),
                Span::raw("  ->  "),
                Span::styled(
                    format_currency(last.total_card_debt()),
                    Style::default().fg(Color::Magenta),
                ),
            ]),
            Line::from(vec![
                Span::raw("Next payday "),
                Span::styled(next_payday.to_string(), Style::default().fg(Color::Cyan)),
                Span::raw(format!("  ({mode_label})")),
            ]),
        ];

        if let Some(day) = state.projection.first_negative_checking() {
            lines.push(Line::from(Span::styled(
                format!("Checking goes negative on {}", day.date),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Checking stays positive over the window",
                Style::default().fg(Color::DarkGray),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_fields(frame: &mut Frame, area: Rect, state: &AppState) {
        let title = if state.editing.is_some() {
            " RULES [editing] "
        } else {
            " RULES [Enter to edit] "
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        let visible = (area.height as usize).saturating_sub(2);
        let scroll = state
            .selected_field
            .saturating_sub(visible.saturating_sub(1));

        let items: Vec<ListItem> = RuleField::ALL
            .iter()
            .enumerate()
            .skip(scroll)
            .take(visible)
            .map(|(idx, field)| {
                let selected = idx == state.selected_field;
                let value = match (&state.editing, selected) {
                    (Some(buffer), true) => format!("{buffer}_"),
                    _ if field.is_day() => format!("{}", field.get(&state.rules) as i64),
                    _ => format_currency(field.get(&state.rules)),
                };

                let style = if selected && state.editing.is_some() {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(Span::styled(
                    format!("{:<22}{:>14}", field.label(), value),
                    style,
                )))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
