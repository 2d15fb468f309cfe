//! Investment input model
//!
//! Describes a compound-growth scenario: a starting principal with fixed
//! monthly contributions at a fixed annual rate over whole years.

use serde::{Deserialize, Serialize};

/// Validation errors for investment inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestValidationError {
    NegativePrincipal,
    NegativeContribution,
    NonFinite(&'static str),
    ZeroYears,
}

impl std::fmt::Display for InvestValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativePrincipal => write!(f, "Principal cannot be negative"),
            Self::NegativeContribution => write!(f, "Monthly contribution cannot be negative"),
            Self::NonFinite(field) => write!(f, "{} must be a finite number", field),
            Self::ZeroYears => write!(f, "Years must be at least 1"),
        }
    }
}

impl std::error::Error for InvestValidationError {}

/// A compound-growth scenario to project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestInput {
    /// Starting balance
    pub principal: f64,
    /// Contribution added at the end of each month
    pub monthly: f64,
    /// Annual growth rate as a percentage (e.g., 6.0 for 6%)
    pub rate: f64,
    /// Projection horizon in whole years
    pub years: u32,
}

impl InvestInput {
    /// Create a new investment input
    pub fn new(principal: f64, monthly: f64, rate: f64, years: u32) -> Self {
        Self {
            principal,
            monthly,
            rate,
            years,
        }
    }

    /// Validate the investment input
    pub fn validate(&self) -> Result<(), InvestValidationError> {
        for (field, value) in [
            ("principal", self.principal),
            ("monthly", self.monthly),
            ("rate", self.rate),
        ] {
            if !value.is_finite() {
                return Err(InvestValidationError::NonFinite(field));
            }
        }
        if self.principal < 0.0 {
            return Err(InvestValidationError::NegativePrincipal);
        }
        if self.monthly < 0.0 {
            return Err(InvestValidationError::NegativeContribution);
        }
        if self.years == 0 {
            return Err(InvestValidationError::ZeroYears);
        }
        Ok(())
    }

    /// Monthly periodic rate derived from the annual rate
    pub fn monthly_rate(&self) -> f64 {
        self.rate / 100.0 / 12.0
    }
}
