//! Income and expense models
//!
//! Plain value records for tracked income sources and categorized expenses.
//! Identifiers are opaque caller-supplied strings used only to correlate
//! results with inputs; the math never reads them.

use serde::{Deserialize, Serialize};

/// Validation errors for income and expense items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountValidationError {
    NegativeAmount(String),
    NonFiniteAmount(String),
}

impl std::fmt::Display for AmountValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount(name) => {
                write!(f, "Amount for '{}' cannot be negative", name)
            }
            Self::NonFiniteAmount(name) => {
                write!(f, "Amount for '{}' must be a finite number", name)
            }
        }
    }
}

impl std::error::Error for AmountValidationError {}

/// A single income source tracked by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeItem {
    /// Opaque caller-supplied identifier, echoed back unchanged
    #[serde(default)]
    pub id: String,
    /// Display name (e.g., "Salary")
    pub name: String,
    /// Monthly amount in currency units
    pub amount: f64,
}

impl IncomeItem {
    /// Create a new income item
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }

    /// Validate the income item
    pub fn validate(&self) -> Result<(), AmountValidationError> {
        validate_amount(&self.name, self.amount)
    }
}

/// A single categorized expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Opaque caller-supplied identifier, echoed back unchanged
    #[serde(default)]
    pub id: String,
    /// Expense category (e.g., "rent", "food")
    pub category: String,
    /// Monthly amount in currency units
    pub amount: f64,
}

impl ExpenseItem {
    /// Create a new expense item
    pub fn new(id: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            amount,
        }
    }

    /// Validate the expense item
    pub fn validate(&self) -> Result<(), AmountValidationError> {
        validate_amount(&self.category, self.amount)
    }

    /// Parse an expense from `category=amount` form (e.g., "rent=1000")
    pub fn parse(s: &str) -> Result<Self, ExpenseParseError> {
        let s = s.trim();
        let (category, amount) = s
            .split_once('=')
            .ok_or_else(|| ExpenseParseError::InvalidFormat(s.to_string()))?;

        let category = category.trim();
        if category.is_empty() {
            return Err(ExpenseParseError::InvalidFormat(s.to_string()));
        }

        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| ExpenseParseError::InvalidAmount(amount.trim().to_string()))?;

        Ok(Self::new("", category, amount))
    }
}

fn validate_amount(name: &str, amount: f64) -> Result<(), AmountValidationError> {
    if !amount.is_finite() {
        return Err(AmountValidationError::NonFiniteAmount(name.to_string()));
    }
    if amount < 0.0 {
        return Err(AmountValidationError::NegativeAmount(name.to_string()));
    }
    Ok(())
}

/// Error type for expense parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseParseError {
    InvalidFormat(String),
    InvalidAmount(String),
}

impl std::fmt::Display for ExpenseParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(s) => {
                write!(f, "Invalid expense format (expected category=amount): {}", s)
            }
            Self::InvalidAmount(s) => write!(f, "Invalid expense amount: {}", s),
        }
    }
}

impl std::error::Error for ExpenseParseError {}
