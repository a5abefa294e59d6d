//! Starting-balance snapshot import.
//!
//! The engine does not care where its starting balances come from: a parsed
//! spreadsheet, a bank-aggregation export, or a hand-written file all reduce
//! to the same few fields. This module defines that boundary shape and loads
//! it from YAML or JSON, keyed on file extension.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use cashplan_core::{CardSet, ProjectionRules};

use super::storage::StorageError;

/// A provenance-agnostic snapshot of current balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Current checking balance (signed).
    pub checking: f64,
    /// Amount owed per card.
    #[serde(default)]
    pub cards: CardSet<f64>,
    /// Most recent closing-statement balance per card.
    #[serde(default)]
    pub statements: CardSet<f64>,
    /// Authorized-but-unposted charges per card.
    #[serde(default)]
    pub pending: CardSet<f64>,
}

impl BalanceSnapshot {
    /// Load a snapshot from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let content = fs::read_to_string(path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| {
                StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e))
            }),
            "yaml" | "yml" => serde_saphyr::from_str(&content).map_err(|e| {
                StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e))
            }),
            other => Err(StorageError::Parse(format!(
                "Unsupported snapshot format '.{other}' (expected .yaml, .yml or .json)"
            ))),
        }
    }

    /// Overwrite a rule set's starting balances with this snapshot.
    ///
    /// Strategy fields (paycheck, rent, spending, payment plans) are left
    /// untouched; a fresh snapshot changes where the projection starts, not
    /// what the user plans to do.
    pub fn apply(&self, rules: &mut ProjectionRules) {
        rules.checking_balance = self.checking;
        rules.card_balances = self.cards;
        rules.statement_balances = self.statements;
        rules.pending_charges = self.pending;
    }
}
