//! Near-term feed of upcoming cash events.
//!
//! Flattens the next 30 days of the projection into discrete
//! (date, event, amount) lines: income in green, outflows in red, card-bound
//! spending in yellow.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use cashplan_core::EventKind;

use crate::state::AppState;
use crate::util::format::{format_currency, format_day};

const FEED_WINDOW_DAYS: i32 = 30;

pub struct UpcomingPanel;

impl UpcomingPanel {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" NEXT 30 DAYS ");

        let start = state
            .projection
            .days
            .first()
            .map(|day| day.date)
            .unwrap_or(state.today);
        let items = state.projection.upcoming(start, FEED_WINDOW_DAYS);

        if items.is_empty() {
            frame.render_widget(
                Paragraph::new("No upcoming events")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }

        let visible = (area.height as usize).saturating_sub(2);
        let rows: Vec<ListItem> = items
            .iter()
            .take(visible)
            .map(|item| {
                let (sign, color) = match item.kind {
                    EventKind::Payday => ("+", Color::Green),
                    EventKind::Spending => (" ", Color::Yellow),
                    EventKind::Rent | EventKind::CardPayment(_) => ("-", Color::Red),
                };
                let line = Line::from(vec![
                    Span::styled(
                        format!("{}  ", format_day(item.date)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!("{:<16}", item.kind.label())),
                    Span::styled(
                        format!("{sign}{}", format_currency(item.amount)),
                        Style::default().fg(color),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        frame.render_widget(List::new(rows).block(block), area);
    }
}
