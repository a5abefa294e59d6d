use std::fmt;

/// Errors raised when a rule set fails boundary validation.
///
/// The engine itself is total over well-formed rules: a checking balance
/// going negative mid-projection is a result to surface, never an error, and
/// out-of-range due-days simply never fire. The only failures live at the
/// boundary, where caller-supplied amounts can be malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum RulesError {
    NonFiniteAmount { field: &'static str, value: f64 },
    NegativeAmount { field: &'static str, value: f64 },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::NonFiniteAmount { field, value } => {
                write!(f, "{field} must be a finite amount, got {value}")
            }
            RulesError::NegativeAmount { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for RulesError {}

pub type Result<T> = std::result::Result<T, RulesError>;
