//! Debt input model
//!
//! Describes a single revolving balance paid down with a fixed monthly
//! payment at a fixed APR.

use serde::{Deserialize, Serialize};

/// Validation errors for debt inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    NegativeBalance,
    NegativeApr,
    NegativePayment,
    NonFinite(&'static str),
}

impl std::fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeBalance => write!(f, "Balance cannot be negative"),
            Self::NegativeApr => write!(f, "APR cannot be negative"),
            Self::NegativePayment => write!(f, "Monthly payment cannot be negative"),
            Self::NonFinite(field) => write!(f, "{} must be a finite number", field),
        }
    }
}

impl std::error::Error for DebtValidationError {}

/// A debt to project payoff for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtInput {
    /// Current outstanding balance
    pub balance: f64,
    /// Annual percentage rate (e.g., 24.0 for 24%)
    pub apr: f64,
    /// Fixed monthly payment
    pub payment: f64,
}

impl DebtInput {
    /// Create a new debt input
    pub fn new(balance: f64, apr: f64, payment: f64) -> Self {
        Self {
            balance,
            apr,
            payment,
        }
    }

    /// Validate the debt input
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        for (field, value) in [
            ("balance", self.balance),
            ("apr", self.apr),
            ("payment", self.payment),
        ] {
            if !value.is_finite() {
                return Err(DebtValidationError::NonFinite(field));
            }
        }
        if self.balance < 0.0 {
            return Err(DebtValidationError::NegativeBalance);
        }
        if self.apr < 0.0 {
            return Err(DebtValidationError::NegativeApr);
        }
        if self.payment < 0.0 {
            return Err(DebtValidationError::NegativePayment);
        }
        Ok(())
    }

    /// Monthly periodic rate derived from the APR
    pub fn monthly_rate(&self) -> f64 {
        self.apr / 100.0 / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert!(DebtInput::new(1200.0, 24.0, 100.0).validate().is_ok());
        assert!(DebtInput::new(0.0, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative() {
        assert_eq!(
            DebtInput::new(-1.0, 24.0, 100.0).validate(),
            Err(DebtValidationError::NegativeBalance)
        );
        assert_eq!(
            DebtInput::new(1200.0, -24.0, 100.0).validate(),
            Err(DebtValidationError::NegativeApr)
        );
        assert_eq!(
            DebtInput::new(1200.0, 24.0, -100.0).validate(),
            Err(DebtValidationError::NegativePayment)
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert_eq!(
            DebtInput::new(f64::INFINITY, 24.0, 100.0).validate(),
            Err(DebtValidationError::NonFinite("balance"))
        );
    }

    #[test]
    fn test_monthly_rate() {
        let debt = DebtInput::new(1000.0, 24.0, 50.0);
        assert!((debt.monthly_rate() - 0.02).abs() < 1e-12);
    }
}
