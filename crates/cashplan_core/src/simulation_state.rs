//! Runtime state for one projection run.
//!
//! All mutation during a run happens here: the running balances, the
//! pending-charge flag, and the weekly-spending cursor. The state is seeded
//! from (but never writes back to) the rule set, and [`SimulationState::step_day`]
//! is the complete one-day transition, so the per-day semantics are testable
//! without the iteration driver.

use jiff::civil::Date;

use crate::config::ProjectionRules;
use crate::date_math;
use crate::model::{CardId, CardSet, DayRecord};
use crate::schedule;

/// How card payments are sized on their due-days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    /// Pay the configured per-card amount (capped at the card's balance).
    Fixed,
    /// Pay the card's statement balance (capped at the card's balance),
    /// modeling "keep the statements paid" until cash runs out.
    StatementMinimum,
}

#[derive(Debug, Clone)]
pub struct SimTimeline {
    pub start_date: Date,
    pub end_date: Date,
    pub current_date: Date,
}

/// The four running balances, mutated as events apply.
#[derive(Debug, Clone)]
pub struct SimBalances {
    pub checking: f64,
    pub cards: CardSet<f64>,
}

/// Once-per-run and rolling cursors the day loop advances.
#[derive(Debug, Clone)]
pub struct SimCursors {
    /// Whether the rule set's pending charges have posted yet.
    pub pending_posted: bool,
    /// Date discretionary spending last fired. Initialized to one week
    /// before the start so spending is eligible on day one.
    pub last_spending: Date,
}

/// Runtime state threaded through the day loop.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub timeline: SimTimeline,
    pub balances: SimBalances,
    pub cursors: SimCursors,
}

impl SimulationState {
    /// Seed state from a rule set for the given window.
    pub fn from_rules(rules: &ProjectionRules, start_date: Date, end_date: Date) -> Self {
        Self {
            timeline: SimTimeline {
                start_date,
                end_date,
                current_date: start_date,
            },
            balances: SimBalances {
                checking: rules.checking_balance,
                cards: rules.card_balances,
            },
            cursors: SimCursors {
                pending_posted: false,
                last_spending: date_math::add_days(start_date, -7),
            },
        }
    }

    /// Apply every event due on `current_date`, in fixed intra-day order,
    /// and emit that day's record.
    ///
    /// Order: pending-charge posting, paycheck, card payments, weekly
    /// spending, rent. Card payments never drive a card balance negative;
    /// checking has no such floor and a negative balance is surfaced through
    /// the record's notes rather than an error.
    pub fn step_day(&mut self, rules: &ProjectionRules, mode: PaymentMode) -> DayRecord {
        let today = self.timeline.current_date;
        let checking_at_open = self.balances.checking;
        let mut fired: Vec<String> = Vec::new();

        // Pending charges post once, 1-2 days into the window
        if !self.cursors.pending_posted {
            let offset = date_math::days_between(self.timeline.start_date, today);
            if (1..=2).contains(&offset) {
                let mut any_posted = false;
                for card in CardId::ALL {
                    let amount = rules.pending_charges[card];
                    if amount > 0.0 {
                        self.balances.cards[card] += amount;
                        fired.push(format!("{} pending posted", card.label()));
                        any_posted = true;
                    }
                }
                if any_posted {
                    self.cursors.pending_posted = true;
                }
            }
        }

        // Paycheck
        let mut paycheck = 0.0;
        if schedule::is_payday(today, rules.payday_reference) {
            paycheck = rules.paycheck_amount;
            self.balances.checking += paycheck;
            fired.push("Payday".to_string());
        }

        // Card payments, each gated on its own due-day. Evaluation order
        // across cards cannot change the outcome: each payment touches only
        // its own card plus checking debits, which commute.
        let mut card_payments = CardSet::<f64>::default();
        for card in CardId::ALL {
            let plan = rules.card_plans[card];
            if !schedule::is_monthly_due(today, plan.due_day) {
                continue;
            }
            let budget = match mode {
                PaymentMode::Fixed => plan.payment_amount,
                PaymentMode::StatementMinimum => rules.statement_balances[card],
            };
            let balance = self.balances.cards[card];
            if budget > 0.0 && balance > 0.0 {
                let payment = budget.min(balance);
                self.balances.checking -= payment;
                self.balances.cards[card] -= payment;
                card_payments[card] = payment;
                fired.push(format!("{} payment", card.label()));
            }
        }

        // Weekly spending lands on the payday weekday, at most every 7 days,
        // and grows the designated card's debt rather than debiting checking
        let mut spending = 0.0;
        if today.weekday() == rules.payday_reference.weekday()
            && schedule::weekly_elapsed(self.cursors.last_spending, today)
        {
            spending = rules.weekly_spending;
            self.balances.cards[rules.spending_card] += spending;
            self.cursors.last_spending = today;
            if spending > 0.0 {
                fired.push("Spending".to_string());
            }
        }

        // Rent
        let mut rent = 0.0;
        if schedule::is_monthly_due(today, rules.rent_day) {
            rent = rules.rent;
            self.balances.checking -= rent;
            fired.push("Rent".to_string());
        }

        let mut notes = fired.join(", ");
        if checking_at_open >= 0.0 && self.balances.checking < 0.0 {
            notes.push_str(" (checking negative)");
        }

        DayRecord {
            date: today,
            paycheck,
            spending,
            rent,
            card_payments,
            checking: self.balances.checking,
            cards: self.balances.cards,
            notes,
        }
    }

    /// Move the timeline to the next calendar day.
    pub fn advance_day(&mut self) {
        self.timeline.current_date = date_math::add_days(self.timeline.current_date, 1);
    }
}
