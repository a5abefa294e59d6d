//! Persisted application data.
//!
//! Only the user-editable configuration is ever written to disk: the rule
//! set plus the dashboard's horizon and payment-mode toggles. Projections
//! are derived data and are recomputed from scratch on load and on every
//! edit.

use serde::{Deserialize, Serialize};

use cashplan_core::ProjectionRules;

fn default_horizon_months() -> u32 {
    4
}

/// Top-level persisted state, stored as `rules.yaml` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppData {
    /// The projection rule set as last edited.
    pub rules: ProjectionRules,

    /// Horizon of the fixed-payment projection, in months.
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,

    /// Whether the dashboard was left in statement-minimum mode.
    #[serde(default)]
    pub minimum_payment_mode: bool,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            rules: ProjectionRules::default(),
            horizon_months: default_horizon_months(),
            minimum_payment_mode: false,
        }
    }
}

impl AppData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashplan_core::CardId;

    #[test]
    fn test_yaml_round_trip() {
        let mut data = AppData::default();
        data.rules.checking_balance = 2_400.0;
        data.rules.card_balances[CardId::B] = 310.0;
        data.horizon_months = 6;
        data.minimum_payment_mode = true;

        let yaml = data.to_yaml().unwrap();
        let back = AppData::from_yaml(&yaml).unwrap();

        assert_eq!(back.rules, data.rules);
        assert_eq!(back.horizon_months, 6);
        assert!(back.minimum_payment_mode);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let yaml = "rules:\n  checking_balance: 10.0\n  paycheck_amount: 0.0\n  rent: 0.0\n  rent_day: 1\n  weekly_spending: 0.0\n";
        let data = AppData::from_yaml(yaml).unwrap();
        assert_eq!(data.horizon_months, 4);
        assert!(!data.minimum_payment_mode);
    }
}
