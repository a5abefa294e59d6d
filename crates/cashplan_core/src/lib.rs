//! Personal cash-flow projection library
//!
//! This crate provides a deterministic, day-stepped projection engine for
//! short-horizon personal finances. Given a starting snapshot (checking plus
//! three credit-card balances) and a set of recurring rules, it walks a
//! calendar window one day at a time and produces a ledger of daily records:
//! - Biweekly paychecks anchored to a known payday
//! - Monthly rent and per-card payment due-days
//! - Weekly discretionary spending charged to a designated card
//! - One-time posting of pending card charges shortly after the window opens
//!
//! Two payment strategies are supported: a fixed per-card monthly amount, and
//! a "statement minimum" mode that pays down each card's statement balance
//! until checking runs dry.
//!
//! The engine reads no ambient clock: callers pass "today" explicitly, so a
//! projection is a pure function of its inputs.
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic rule setup:
//!
//! ```ignore
//! use cashplan_core::{CardId, RulesBuilder, simulate};
//!
//! let rules = RulesBuilder::new()
//!     .checking(2_400.0)
//!     .paycheck(1_900.0)
//!     .payday_reference(2025, 11, 20)
//!     .rent(1_760.0, 23)
//!     .weekly_spending(200.0)
//!     .card_balance(CardId::A, 850.0)
//!     .payment(CardId::A, 300.0)
//!     .build()?;
//!
//! let projection = simulate(&rules, jiff::civil::date(2025, 12, 1), 4);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod date_math;
pub mod error;
pub mod schedule;
pub mod simulation;
pub mod simulation_state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{CardPlan, ProjectionRules, RulesBuilder};
pub use error::RulesError;
pub use model::{CardId, CardSet, DayRecord, EventKind, Projection, UpcomingItem};
pub use simulation::{simulate, simulate_minimum_payments};
pub use simulation_state::{PaymentMode, SimulationState};
