//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `simulation` - fixed-payment day stepping, window shapes, event cadences
//! - `minimum_payments` - statement-minimum variant and its early-stop contract
//! - `chaining` - seeding a follow-on segment from a finished projection
//! - `builder_dsl` - builder DSL, boundary validation, serde round-trips

mod minimum_payments;
mod simulation;
