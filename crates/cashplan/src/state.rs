//! Application state.
//!
//! `AppState` owns the rule set, the derived projection, and all UI state.
//! The projection is never edited in place: every committed change to a rule
//! throws the old sequence away and reruns the full simulation.

use std::path::PathBuf;

use jiff::civil::Date;

use cashplan_core::{
    CardId, PaymentMode, Projection, ProjectionRules, simulate, simulate_minimum_payments,
};

use crate::data::app_data::AppData;
use crate::data::storage::{DataDirectory, StorageError};

/// Top-level dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Dashboard,
    Ledger,
    Chart,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Dashboard, TabId::Ledger, TabId::Chart];

    pub fn name(self) -> &'static str {
        match self {
            TabId::Dashboard => "Dashboard",
            TabId::Ledger => "Ledger",
            TabId::Chart => "Chart",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TabId::Dashboard => 0,
            TabId::Ledger => 1,
            TabId::Chart => 2,
        }
    }
}

/// One inline-editable rule field on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    Checking,
    Paycheck,
    Rent,
    RentDay,
    WeeklySpending,
    CardBalance(CardId),
    PendingCharge(CardId),
    Statement(CardId),
    PaymentAmount(CardId),
    PaymentDay(CardId),
}

impl RuleField {
    pub const ALL: [RuleField; 20] = [
        RuleField::Checking,
        RuleField::Paycheck,
        RuleField::Rent,
        RuleField::RentDay,
        RuleField::WeeklySpending,
        RuleField::CardBalance(CardId::A),
        RuleField::PendingCharge(CardId::A),
        RuleField::Statement(CardId::A),
        RuleField::PaymentAmount(CardId::A),
        RuleField::PaymentDay(CardId::A),
        RuleField::CardBalance(CardId::B),
        RuleField::PendingCharge(CardId::B),
        RuleField::Statement(CardId::B),
        RuleField::PaymentAmount(CardId::B),
        RuleField::PaymentDay(CardId::B),
        RuleField::CardBalance(CardId::C),
        RuleField::PendingCharge(CardId::C),
        RuleField::Statement(CardId::C),
        RuleField::PaymentAmount(CardId::C),
        RuleField::PaymentDay(CardId::C),
    ];

    pub fn label(self) -> String {
        match self {
            RuleField::Checking => "Checking balance".to_string(),
            RuleField::Paycheck => "Paycheck (biweekly)".to_string(),
            RuleField::Rent => "Rent".to_string(),
            RuleField::RentDay => "Rent due-day".to_string(),
            RuleField::WeeklySpending => "Weekly spending".to_string(),
            RuleField::CardBalance(card) => format!("{} balance", card.label()),
            RuleField::PendingCharge(card) => format!("{} pending", card.label()),
            RuleField::Statement(card) => format!("{} statement", card.label()),
            RuleField::PaymentAmount(card) => format!("{} payment", card.label()),
            RuleField::PaymentDay(card) => format!("{} due-day", card.label()),
        }
    }

    /// Day-of-month fields render and parse as integers.
    pub fn is_day(self) -> bool {
        matches!(self, RuleField::RentDay | RuleField::PaymentDay(_))
    }

    pub fn get(self, rules: &ProjectionRules) -> f64 {
        match self {
            RuleField::Checking => rules.checking_balance,
            RuleField::Paycheck => rules.paycheck_amount,
            RuleField::Rent => rules.rent,
            RuleField::RentDay => rules.rent_day as f64,
            RuleField::WeeklySpending => rules.weekly_spending,
            RuleField::CardBalance(card) => rules.card_balances[card],
            RuleField::PendingCharge(card) => rules.pending_charges[card],
            RuleField::Statement(card) => rules.statement_balances[card],
            RuleField::PaymentAmount(card) => rules.card_plans[card].payment_amount,
            RuleField::PaymentDay(card) => rules.card_plans[card].due_day as f64,
        }
    }

    pub fn set(self, rules: &mut ProjectionRules, value: f64) {
        match self {
            RuleField::Checking => rules.checking_balance = value,
            RuleField::Paycheck => rules.paycheck_amount = value,
            RuleField::Rent => rules.rent = value,
            RuleField::RentDay => rules.rent_day = value as i8,
            RuleField::WeeklySpending => rules.weekly_spending = value,
            RuleField::CardBalance(card) => rules.card_balances[card] = value,
            RuleField::PendingCharge(card) => rules.pending_charges[card] = value,
            RuleField::Statement(card) => rules.statement_balances[card] = value,
            RuleField::PaymentAmount(card) => rules.card_plans[card].payment_amount = value,
            RuleField::PaymentDay(card) => rules.card_plans[card].due_day = value as i8,
        }
    }
}

/// All mutable application state.
pub struct AppState {
    pub rules: ProjectionRules,
    /// The caller-injected "today"; fixed at startup so redraws are stable.
    pub today: Date,
    pub horizon_months: u32,
    pub mode: PaymentMode,
    /// Derived from `rules`; regenerated in full by [`AppState::recompute`].
    pub projection: Projection,

    pub active_tab: TabId,
    pub selected_field: usize,
    /// Input buffer while inline-editing the selected field.
    pub editing: Option<String>,
    pub ledger_scroll: usize,

    pub error_message: Option<String>,
    pub dirty: bool,
    pub exit: bool,
    pub data_dir: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        let rules = ProjectionRules::default();
        let today = jiff::Zoned::now().date();
        let mut state = Self {
            rules,
            today,
            horizon_months: 4,
            mode: PaymentMode::Fixed,
            projection: Projection::default(),
            active_tab: TabId::Dashboard,
            selected_field: 0,
            editing: None,
            ledger_scroll: 0,
            error_message: None,
            dirty: false,
            exit: false,
            data_dir: None,
        };
        state.recompute();
        state
    }
}

impl AppState {
    /// Build state from persisted data.
    pub fn from_app_data(data: AppData, data_dir: PathBuf) -> Self {
        let mut state = Self {
            rules: data.rules,
            mode: if data.minimum_payment_mode {
                PaymentMode::StatementMinimum
            } else {
                PaymentMode::Fixed
            },
            horizon_months: data.horizon_months,
            data_dir: Some(data_dir),
            ..Default::default()
        };
        state.recompute();
        state
    }

    /// Persisted view of the current state.
    pub fn to_app_data(&self) -> AppData {
        AppData {
            rules: self.rules.clone(),
            horizon_months: self.horizon_months,
            minimum_payment_mode: self.mode == PaymentMode::StatementMinimum,
        }
    }

    /// Throw away the projection and rerun the simulation from the rules.
    pub fn recompute(&mut self) {
        if let Err(e) = self.rules.validate() {
            self.set_error(format!("Invalid rules: {e}"));
            return;
        }

        self.projection = match self.mode {
            PaymentMode::Fixed => simulate(&self.rules, self.today, self.horizon_months),
            PaymentMode::StatementMinimum => {
                simulate_minimum_payments(&self.rules, self.today, self.horizon_months)
            }
        };
        self.ledger_scroll = self.ledger_scroll.min(self.projection.len().saturating_sub(1));
        tracing::debug!(
            days = self.projection.len(),
            mode = ?self.mode,
            "projection recomputed"
        );
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            PaymentMode::Fixed => PaymentMode::StatementMinimum,
            PaymentMode::StatementMinimum => PaymentMode::Fixed,
        };
        self.mark_modified();
    }

    pub fn adjust_horizon(&mut self, delta: i64) {
        let months = (self.horizon_months as i64 + delta).clamp(1, 120);
        self.horizon_months = months as u32;
        self.mark_modified();
    }

    pub fn selected_rule_field(&self) -> RuleField {
        RuleField::ALL[self.selected_field]
    }

    pub fn select_next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % RuleField::ALL.len();
    }

    pub fn select_prev_field(&mut self) {
        self.selected_field = self
            .selected_field
            .checked_sub(1)
            .unwrap_or(RuleField::ALL.len() - 1);
    }

    /// Begin inline editing of the selected field, seeding the buffer with
    /// its current value.
    pub fn begin_edit(&mut self) {
        let field = self.selected_rule_field();
        let value = field.get(&self.rules);
        let buffer = if field.is_day() {
            format!("{}", value as i64)
        } else {
            format!("{value:.2}")
        };
        self.editing = Some(buffer);
    }

    /// Parse the edit buffer, write it into the rules, and recompute.
    pub fn commit_edit(&mut self) {
        let Some(buffer) = self.editing.take() else {
            return;
        };
        match buffer.trim().parse::<f64>() {
            Ok(value) => {
                self.selected_rule_field().set(&mut self.rules, value);
                self.mark_modified();
            }
            Err(_) => self.set_error(format!("Not a number: '{}'", buffer.trim())),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Mark the rule set changed and rerun the simulation.
    pub fn mark_modified(&mut self) {
        self.dirty = true;
        self.recompute();
    }

    /// Save the rule set to the data directory.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let Some(dir) = &self.data_dir else {
            return Ok(());
        };
        DataDirectory::new(dir.clone()).save(&self.to_app_data())?;
        self.dirty = false;
        tracing::info!("Saved rules to {}", dir.display());
        Ok(())
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn test_state() -> AppState {
        let mut state = AppState {
            today: date(2026, 9, 1),
            ..Default::default()
        };
        state.rules.payday_reference = date(2026, 8, 20);
        state.recompute();
        state
    }

    #[test]
    fn test_recompute_regenerates_projection() {
        let mut state = test_state();
        let before = state.projection.len();
        assert!(before > 0);

        state.rules.checking_balance = 5_000.0;
        state.mark_modified();
        assert_eq!(state.projection.days[0].checking, 5_000.0);
        assert!(state.dirty);
    }

    #[test]
    fn test_edit_flow_commits_value() {
        let mut state = test_state();
        state.selected_field = 0; // checking balance
        state.begin_edit();
        state.editing = Some("1234.5".to_string());
        state.commit_edit();

        assert_eq!(state.rules.checking_balance, 1_234.5);
        assert!(state.editing.is_none());
        assert!(state.dirty);
    }

    #[test]
    fn test_bad_edit_sets_error_and_keeps_value() {
        let mut state = test_state();
        let original = state.rules.checking_balance;
        state.begin_edit();
        state.editing = Some("12x".to_string());
        state.commit_edit();

        assert_eq!(state.rules.checking_balance, original);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_day_fields_round_to_integers() {
        let mut state = test_state();
        RuleField::RentDay.set(&mut state.rules, 23.0);
        assert_eq!(state.rules.rent_day, 23);
        assert_eq!(RuleField::RentDay.get(&state.rules), 23.0);
    }

    #[test]
    fn test_toggle_mode_recomputes() {
        let mut state = test_state();
        assert_eq!(state.mode, PaymentMode::Fixed);
        state.toggle_mode();
        assert_eq!(state.mode, PaymentMode::StatementMinimum);
    }

    #[test]
    fn test_horizon_clamped() {
        let mut state = test_state();
        state.adjust_horizon(-100);
        assert_eq!(state.horizon_months, 1);
        state.adjust_horizon(500);
        assert_eq!(state.horizon_months, 120);
    }
}
