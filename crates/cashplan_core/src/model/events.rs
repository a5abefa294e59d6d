//! Event vocabulary for daily records and the upcoming-payments feed.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::cards::CardId;

/// Kind of cash event a projection day can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Payday,
    Spending,
    Rent,
    CardPayment(CardId),
}

impl EventKind {
    pub fn label(self) -> String {
        match self {
            EventKind::Payday => "Payday".to_string(),
            EventKind::Spending => "Spending".to_string(),
            EventKind::Rent => "Rent".to_string(),
            EventKind::CardPayment(card) => format!("{} payment", card.label()),
        }
    }
}

/// One discrete (date, kind, amount) entry in the near-term payments feed.
///
/// Produced by flattening the nonzero event amounts of a window of daily
/// records; consumed as-is by list views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpcomingItem {
    pub date: Date,
    pub kind: EventKind,
    pub amount: f64,
}
