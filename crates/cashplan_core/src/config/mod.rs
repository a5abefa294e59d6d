//! Projection rule set
//!
//! `ProjectionRules` is the complete configuration for one simulation run:
//! the starting balance snapshot plus every recurring-event parameter. It is
//! immutable for the duration of a run; the engine copies the starting
//! balances into its own state and never writes back.
//!
//! # Builder DSL
//!
//! For a more ergonomic way to assemble rules, use the builder:
//!
//! ```ignore
//! use cashplan_core::{CardId, RulesBuilder};
//!
//! let rules = RulesBuilder::new()
//!     .checking(2_400.0)
//!     .paycheck(1_900.0)
//!     .payday_reference(2025, 11, 20)
//!     .rent(1_760.0, 23)
//!     .weekly_spending(200.0)
//!     .card_balance(CardId::A, 850.0)
//!     .statement(CardId::A, 640.0)
//!     .payment(CardId::A, 300.0)
//!     .build()?;
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};
use crate::model::{CardId, CardSet};

pub mod builder;

pub use builder::RulesBuilder;

/// Monthly payment strategy for a single card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPlan {
    /// Amount paid on the due-day (fixed-payment mode). Zero disables the
    /// payment entirely.
    #[serde(default)]
    pub payment_amount: f64,
    /// Day-of-month the payment fires. Values of 29-31 never fire in months
    /// too short to contain them.
    pub due_day: i8,
}

fn default_card_plans() -> CardSet<CardPlan> {
    CardSet::new(
        CardPlan {
            payment_amount: 0.0,
            due_day: 3,
        },
        CardPlan {
            payment_amount: 0.0,
            due_day: 8,
        },
        CardPlan {
            payment_amount: 0.0,
            due_day: 24,
        },
    )
}

fn default_spending_card() -> CardId {
    // The card with the latest due-day carries routine spending: charges land
    // on the statement with the longest runway before payment.
    CardId::C
}

fn default_payday_reference() -> Date {
    // An arbitrary known Thursday payday; callers override this
    jiff::civil::date(2025, 11, 20)
}

/// Complete configuration for one projection run.
///
/// Starting balances describe "now"; everything else describes the recurring
/// rules to project forward. Exactly one rule set exists per simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRules {
    // === Starting snapshot ===
    /// Checking balance (signed; may start negative).
    pub checking_balance: f64,
    /// Amount currently owed on each card (non-negative).
    #[serde(default)]
    pub card_balances: CardSet<f64>,
    /// Authorized-but-unposted charges per card; each posts exactly once,
    /// 1-2 days into the window.
    #[serde(default)]
    pub pending_charges: CardSet<f64>,
    /// Most recent closing-statement balance per card; the ceiling for
    /// minimum-payment mode.
    #[serde(default)]
    pub statement_balances: CardSet<f64>,

    // === Recurring income ===
    /// Paycheck amount, deposited to checking every other week.
    pub paycheck_amount: f64,
    /// A known payday anchoring the biweekly cycle (also fixes the weekday
    /// discretionary spending lands on).
    #[serde(default = "default_payday_reference")]
    pub payday_reference: Date,

    // === Recurring expenses ===
    /// Monthly rent, debited from checking.
    pub rent: f64,
    /// Day-of-month rent is due.
    pub rent_day: i8,
    /// Weekly discretionary spending, charged to `spending_card` as debt.
    pub weekly_spending: f64,
    /// The card that carries routine spending.
    #[serde(default = "default_spending_card")]
    pub spending_card: CardId,

    // === Payment strategy ===
    /// Per-card monthly payment amount and due-day.
    #[serde(default = "default_card_plans")]
    pub card_plans: CardSet<CardPlan>,

    // === Window ===
    /// Explicit window start. `None` means "start at the date the caller
    /// passes as today".
    #[serde(default)]
    pub start_date: Option<Date>,
}

impl Default for ProjectionRules {
    fn default() -> Self {
        Self {
            checking_balance: 0.0,
            card_balances: CardSet::default(),
            pending_charges: CardSet::default(),
            statement_balances: CardSet::default(),
            paycheck_amount: 0.0,
            payday_reference: default_payday_reference(),
            rent: 0.0,
            rent_day: 1,
            weekly_spending: 0.0,
            spending_card: default_spending_card(),
            card_plans: default_card_plans(),
            start_date: None,
        }
    }
}

impl ProjectionRules {
    /// Check that every amount is well-formed before a run.
    ///
    /// Checking may be negative (that is a legitimate starting position);
    /// every other amount must be finite and non-negative. Out-of-range
    /// due-days are deliberately not rejected: they degrade to events that
    /// never fire.
    pub fn validate(&self) -> Result<()> {
        check_finite("checking_balance", self.checking_balance)?;
        check_amount("paycheck_amount", self.paycheck_amount)?;
        check_amount("rent", self.rent)?;
        check_amount("weekly_spending", self.weekly_spending)?;

        for card in CardId::ALL {
            check_amount("card_balances", self.card_balances[card])?;
            check_amount("pending_charges", self.pending_charges[card])?;
            check_amount("statement_balances", self.statement_balances[card])?;
            check_amount("payment_amount", self.card_plans[card].payment_amount)?;
        }

        Ok(())
    }

    /// Variant with a different explicit start date.
    #[must_use]
    pub fn with_start_date(&self, start: Date) -> Self {
        let mut rules = self.clone();
        rules.start_date = Some(start);
        rules
    }

    /// Variant with a different payment amount for one card.
    #[must_use]
    pub fn with_payment(&self, card: CardId, amount: f64) -> Self {
        let mut rules = self.clone();
        rules.card_plans[card].payment_amount = amount;
        rules
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RulesError::NonFiniteAmount { field, value })
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(RulesError::NegativeAmount { field, value });
    }
    Ok(())
}
