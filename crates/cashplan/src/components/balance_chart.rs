//! Time-series chart of the four running balances.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use cashplan_core::CardId;

use crate::state::AppState;
use crate::util::format::format_compact_currency;

pub struct BalanceChart;

impl BalanceChart {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" BALANCES OVER TIME ");

        if state.projection.is_empty() {
            frame.render_widget(block, area);
            return;
        }

        let checking: Vec<(f64, f64)> = Self::series(state, |day, _| day.checking);
        let card_a: Vec<(f64, f64)> = Self::series(state, |day, _| day.cards[CardId::A]);
        let card_b: Vec<(f64, f64)> = Self::series(state, |day, _| day.cards[CardId::B]);
        let card_c: Vec<(f64, f64)> = Self::series(state, |day, _| day.cards[CardId::C]);

        let y_min = checking
            .iter()
            .chain(&card_a)
            .chain(&card_b)
            .chain(&card_c)
            .map(|&(_, y)| y)
            .fold(f64::INFINITY, f64::min)
            .min(0.0);
        let y_max = checking
            .iter()
            .chain(&card_a)
            .chain(&card_b)
            .chain(&card_c)
            .map(|&(_, y)| y)
            .fold(f64::NEG_INFINITY, f64::max)
            .max(1.0);
        let x_max = (state.projection.len().saturating_sub(1)).max(1) as f64;

        let datasets = vec![
            Dataset::default()
                .name("Checking")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&checking),
            Dataset::default()
                .name(CardId::A.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&card_a),
            Dataset::default()
                .name(CardId::B.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Magenta))
                .data(&card_b),
            Dataset::default()
                .name(CardId::C.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&card_c),
        ];

        let first = state.projection.days[0].date;
        let last = state.projection.final_record().unwrap().date;

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, x_max])
                    .labels(vec![
                        Span::raw(first.to_string()),
                        Span::raw(last.to_string()),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::raw(format_compact_currency(y_min)),
                        Span::raw(format_compact_currency((y_min + y_max) / 2.0)),
                        Span::raw(format_compact_currency(y_max)),
                    ]),
            );

        frame.render_widget(chart, area);
    }

    fn series(
        state: &AppState,
        value: impl Fn(&cashplan_core::DayRecord, usize) -> f64,
    ) -> Vec<(f64, f64)> {
        state
            .projection
            .iter()
            .enumerate()
            .map(|(i, day)| (i as f64, value(day, i)))
            .collect()
    }
}
