//! Projection drivers.
//!
//! [`simulate`] walks a calendar window one day at a time under the
//! fixed-payment strategy; [`simulate_minimum_payments`] runs the same day
//! stepping but sizes card payments from statement balances and stops early
//! the first time checking ends a day negative, answering "how long can the
//! statements stay paid before cash runs out".
//!
//! The engine never reads a clock: `today` comes from the caller, and is only
//! used when the rule set carries no explicit start date.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::config::ProjectionRules;
use crate::date_math;
use crate::model::Projection;
use crate::simulation_state::{PaymentMode, SimulationState};

/// Project forward under the fixed-payment strategy.
///
/// The window runs from the rule set's start date (or `today` when none is
/// set) through [`window_end`], both endpoints inclusive; one record is
/// emitted per day regardless of what fired.
pub fn simulate(rules: &ProjectionRules, today: Date, horizon_months: u32) -> Projection {
    run(rules, today, horizon_months, PaymentMode::Fixed, false)
}

/// Project forward paying statement balances, stopping once cash runs out.
///
/// Identical day stepping and event order to [`simulate`], except each card
/// payment is `min(statement_balance, card_balance)` and the run terminates,
/// with a stoppage annotation on its last record, the first time checking
/// ends a day below zero. The returned sequence is truncated only in that
/// case; otherwise it covers the full horizon.
pub fn simulate_minimum_payments(
    rules: &ProjectionRules,
    today: Date,
    max_months: u32,
) -> Projection {
    run(rules, today, max_months, PaymentMode::StatementMinimum, true)
}

fn run(
    rules: &ProjectionRules,
    today: Date,
    horizon_months: u32,
    mode: PaymentMode,
    stop_on_negative: bool,
) -> Projection {
    let start = rules.start_date.unwrap_or(today);
    let end = window_end(start, horizon_months, rules.start_date.is_some());

    let mut state = SimulationState::from_rules(rules, start, end);
    let mut days = Vec::with_capacity(date_math::days_between(start, end).max(0) as usize + 1);

    while state.timeline.current_date <= end {
        let mut record = state.step_day(rules, mode);
        let exhausted = stop_on_negative && record.checking < 0.0;
        if exhausted {
            record.notes.push_str(" (stopped: cash exhausted)");
        }
        days.push(record);
        if exhausted {
            break;
        }
        state.advance_day();
    }

    Projection { days }
}

/// Last day of the projection window, inclusive.
///
/// A one-month horizon over an explicit start date runs through the last
/// calendar day of the start month, so mid-month starts produce a partial
/// first month that lines up with month boundaries for chaining. A one-month
/// horizon from an implicit "today" start is a flat 31-day window. Longer
/// horizons add calendar months, clamping to month-end when the start day
/// does not exist in the target month.
fn window_end(start: Date, horizon_months: u32, explicit_start: bool) -> Date {
    if horizon_months == 1 {
        if explicit_start {
            date_math::month_end(start)
        } else {
            date_math::add_days(start, 30)
        }
    } else {
        start.saturating_add((horizon_months as i64).months())
    }
}
