//! Fluent builder for assembling a projection rule set.
//!
//! Every setter returns `self`, so a complete rule set reads as one chained
//! expression; `build()` runs boundary validation so malformed amounts are
//! caught before a simulation ever starts.

use crate::error::Result;
use crate::model::CardId;

use super::ProjectionRules;

/// Fluent construction of [`ProjectionRules`].
#[derive(Debug, Clone, Default)]
pub struct RulesBuilder {
    rules: ProjectionRules,
}

impl RulesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting checking balance (signed).
    #[must_use]
    pub fn checking(mut self, amount: f64) -> Self {
        self.rules.checking_balance = amount;
        self
    }

    /// Starting balance owed on one card.
    #[must_use]
    pub fn card_balance(mut self, card: CardId, amount: f64) -> Self {
        self.rules.card_balances[card] = amount;
        self
    }

    /// Authorized-but-unposted charge on one card.
    #[must_use]
    pub fn pending(mut self, card: CardId, amount: f64) -> Self {
        self.rules.pending_charges[card] = amount;
        self
    }

    /// Most recent closing-statement balance for one card.
    #[must_use]
    pub fn statement(mut self, card: CardId, amount: f64) -> Self {
        self.rules.statement_balances[card] = amount;
        self
    }

    /// Biweekly paycheck amount.
    #[must_use]
    pub fn paycheck(mut self, amount: f64) -> Self {
        self.rules.paycheck_amount = amount;
        self
    }

    /// A known payday anchoring the biweekly cycle.
    #[must_use]
    pub fn payday_reference(mut self, year: i16, month: i8, day: i8) -> Self {
        self.rules.payday_reference = jiff::civil::date(year, month, day);
        self
    }

    /// Monthly rent and its due-day.
    #[must_use]
    pub fn rent(mut self, amount: f64, due_day: i8) -> Self {
        self.rules.rent = amount;
        self.rules.rent_day = due_day;
        self
    }

    /// Weekly discretionary spending amount.
    #[must_use]
    pub fn weekly_spending(mut self, amount: f64) -> Self {
        self.rules.weekly_spending = amount;
        self
    }

    /// Which card carries routine spending.
    #[must_use]
    pub fn spending_card(mut self, card: CardId) -> Self {
        self.rules.spending_card = card;
        self
    }

    /// Monthly payment amount for one card (due-day keeps its default).
    #[must_use]
    pub fn payment(mut self, card: CardId, amount: f64) -> Self {
        self.rules.card_plans[card].payment_amount = amount;
        self
    }

    /// Due-day for one card's payment.
    #[must_use]
    pub fn payment_due_day(mut self, card: CardId, due_day: i8) -> Self {
        self.rules.card_plans[card].due_day = due_day;
        self
    }

    /// Explicit window start date.
    #[must_use]
    pub fn start(mut self, year: i16, month: i8, day: i8) -> Self {
        self.rules.start_date = Some(jiff::civil::date(year, month, day));
        self
    }

    /// Validate and return the finished rule set.
    pub fn build(self) -> Result<ProjectionRules> {
        self.rules.validate()?;
        Ok(self.rules)
    }
}
