//! Domain error types

use std::fmt;
use thiserror::Error;

/// Action a unit was asked to perform while dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitAction {
    RestoreHealth,
    Attack,
    CounterAttack,
}

impl UnitAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestoreHealth => "restore health",
            Self::Attack => "attack",
            Self::CounterAttack => "counter attack",
        }
    }
}

impl fmt::Display for UnitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid {field}: {value} (expected a finite, non-negative number)")]
    InvalidArgument { field: &'static str, value: f64 },

    #[error("Out of fuel: zero fuel amount in fuel tank")]
    OutOfFuel,

    #[error("Too much fuel: {requested} requested but only {headroom} fits in the tank")]
    TooMuchFuel { requested: f64, headroom: f64 },

    #[error("Unit is dead: {name} can't {action}")]
    UnitIsDead { name: String, action: UnitAction },
}

impl DomainError {
    /// Stable error code, useful for logs and reports
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::OutOfFuel => "OUT_OF_FUEL",
            Self::TooMuchFuel { .. } => "TOO_MUCH_FUEL",
            Self::UnitIsDead { .. } => "UNIT_IS_DEAD",
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

/// Accept `value` only if it is finite and non-negative.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidArgument { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("fuel", 10.0), Ok(10.0));
        assert_eq!(non_negative("fuel", 0.0), Ok(0.0));
        assert!(non_negative("fuel", -1.0).is_err());
        assert!(non_negative("fuel", f64::NAN).is_err());
        assert!(non_negative("fuel", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = DomainError::UnitIsDead {
            name: "Kolya".to_string(),
            action: UnitAction::Attack,
        };
        assert_eq!(err.to_string(), "Unit is dead: Kolya can't attack");
        assert_eq!(err.error_code(), "UNIT_IS_DEAD");

        let err = DomainError::TooMuchFuel {
            requested: 50.0,
            headroom: 25.0,
        };
        assert_eq!(
            err.to_string(),
            "Too much fuel: 50 requested but only 25 fits in the tank"
        );
    }
}
