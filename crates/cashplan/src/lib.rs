//! Terminal dashboard for short-horizon personal cash-flow projections
//!
//! Wraps the `cashplan_core` engine in an interactive terminal UI:
//! - A dashboard tab with account summary, editable rules, and the
//!   upcoming-payments feed
//! - A ledger tab tabulating every projected day
//! - A chart tab plotting checking and card balances over the window
//!
//! Rules are persisted to a YAML file in the data directory; the projection
//! itself is never persisted and is recomputed in full on every edit.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
