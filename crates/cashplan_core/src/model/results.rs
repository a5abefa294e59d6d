//! Projection output types
//!
//! A projection is an ordered sequence of daily records, one per simulated
//! calendar day. Records are append-only: the engine emits each one exactly
//! once and the whole sequence is regenerated from scratch whenever any rule
//! changes. Inspection helpers for downstream views (tables, charts, the
//! upcoming-payments feed, chained runs) live here.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::config::ProjectionRules;
use crate::date_math;

use super::cards::{CardId, CardSet};
use super::events::{EventKind, UpcomingItem};

/// One simulated day: the amounts that fired and the post-event balances.
///
/// Event amounts are zero on days the event did not fire. `notes` lists the
/// human-readable names of every event that fired that day; it exists for
/// traceability and display, never for computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: Date,
    pub paycheck: f64,
    pub spending: f64,
    pub rent: f64,
    pub card_payments: CardSet<f64>,
    pub checking: f64,
    pub cards: CardSet<f64>,
    pub notes: String,
}

impl DayRecord {
    /// Total owed across all cards at the end of this day.
    pub fn total_card_debt(&self) -> f64 {
        self.cards.total()
    }

    /// Flatten this day's nonzero event amounts into feed items.
    pub fn events(&self) -> Vec<UpcomingItem> {
        let mut items = Vec::new();
        if self.paycheck > 0.0 {
            items.push(UpcomingItem {
                date: self.date,
                kind: EventKind::Payday,
                amount: self.paycheck,
            });
        }
        for card in CardId::ALL {
            let amount = self.card_payments[card];
            if amount > 0.0 {
                items.push(UpcomingItem {
                    date: self.date,
                    kind: EventKind::CardPayment(card),
                    amount,
                });
            }
        }
        if self.spending > 0.0 {
            items.push(UpcomingItem {
                date: self.date,
                kind: EventKind::Spending,
                amount: self.spending,
            });
        }
        if self.rent > 0.0 {
            items.push(UpcomingItem {
                date: self.date,
                kind: EventKind::Rent,
                amount: self.rent,
            });
        }
        items
    }
}

/// The ordered daily ledger produced by one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub days: Vec<DayRecord>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.iter()
    }

    /// The last emitted record, if any day was simulated.
    pub fn final_record(&self) -> Option<&DayRecord> {
        self.days.last()
    }

    /// First day whose end-of-day checking balance is negative.
    pub fn first_negative_checking(&self) -> Option<&DayRecord> {
        self.days.iter().find(|day| day.checking < 0.0)
    }

    /// Whether the run ended with checking below zero (the minimum-payment
    /// variant's early-stop condition).
    pub fn ends_exhausted(&self) -> bool {
        self.final_record().is_some_and(|day| day.checking < 0.0)
    }

    /// Lowest checking balance seen across the whole window.
    pub fn min_checking(&self) -> Option<f64> {
        self.days.iter().map(|day| day.checking).reduce(f64::min)
    }

    /// Discrete (date, kind, amount) items for every event firing within
    /// `within_days` days of `from`, inclusive, in date order.
    pub fn upcoming(&self, from: Date, within_days: i32) -> Vec<UpcomingItem> {
        let until = date_math::add_days(from, within_days);
        self.days
            .iter()
            .filter(|day| day.date >= from && day.date <= until)
            .flat_map(|day| day.events())
            .collect()
    }

    /// Rule set for a follow-on segment seeded from this projection's final
    /// day: balances carry over, pending charges are cleared (they posted in
    /// this segment), and the window starts the day after this one ended.
    /// Strategy fields stay as in `base`; callers edit them per segment.
    ///
    /// Returns `None` for an empty projection.
    pub fn continuation_rules(&self, base: &ProjectionRules) -> Option<ProjectionRules> {
        let last = self.final_record()?;
        let mut rules = base.clone();
        rules.checking_balance = last.checking;
        rules.card_balances = last.cards;
        rules.pending_charges = CardSet::default();
        rules.start_date = Some(date_math::add_days(last.date, 1));
        Some(rules)
    }
}

impl<'a> IntoIterator for &'a Projection {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
