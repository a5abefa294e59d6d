//! Ledger table: one row per projected day.
//!
//! Renders the daily records with event amounts, running balances, and the
//! notes column, windowed by the scroll offset.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use cashplan_core::{CardId, DayRecord};

use crate::state::AppState;
use crate::util::format::{format_currency_short, format_day};

pub struct LedgerTable;

impl LedgerTable {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let title = format!(" LEDGER ({} days) [j/k scroll] ", state.projection.len());
        let block = Block::default().borders(Borders::ALL).title(title);

        let visible = (area.height as usize).saturating_sub(3);
        let scroll = state
            .ledger_scroll
            .min(state.projection.len().saturating_sub(1));

        let header = Row::new(vec![
            "Date", "Paycheck", "Spend", "Rent", "Pay A", "Pay B", "Pay C", "Checking", "Card A",
            "Card B", "Card C", "Notes",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = state
            .projection
            .iter()
            .skip(scroll)
            .take(visible)
            .map(Self::day_row)
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(10),
        ];

        let table = Table::new(rows, widths).header(header).block(block);
        frame.render_widget(table, area);
    }

    fn day_row(day: &DayRecord) -> Row<'_> {
        let amount_cell = |value: f64, color: Color| {
            if value > 0.0 {
                Cell::from(format_currency_short(value)).style(Style::default().fg(color))
            } else {
                Cell::from("")
            }
        };

        let checking_style = if day.checking < 0.0 {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };

        Row::new(vec![
            Cell::from(format_day(day.date)),
            amount_cell(day.paycheck, Color::Green),
            amount_cell(day.spending, Color::Yellow),
            amount_cell(day.rent, Color::Red),
            amount_cell(day.card_payments[CardId::A], Color::Cyan),
            amount_cell(day.card_payments[CardId::B], Color::Cyan),
            amount_cell(day.card_payments[CardId::C], Color::Cyan),
            Cell::from(format_currency_short(day.checking)).style(checking_style),
            Cell::from(format_currency_short(day.cards[CardId::A])),
            Cell::from(format_currency_short(day.cards[CardId::B])),
            Cell::from(format_currency_short(day.cards[CardId::C])),
            Cell::from(day.notes.as_str()).style(Style::default().fg(Color::DarkGray)),
        ])
    }
}
