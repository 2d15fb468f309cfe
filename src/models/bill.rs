//! Bill and allocation-settings models
//!
//! A bill is a recurring monthly obligation with an optional due day. The
//! allocation settings select how the daily planner spreads each bill over
//! the pay cycle and how results are rounded for display.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Validation errors for bills
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    NegativeAmount(String),
    NonFiniteAmount(String),
    DueDayOutOfRange(u32),
}

impl std::fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount(name) => write!(f, "Amount for '{}' cannot be negative", name),
            Self::NonFiniteAmount(name) => {
                write!(f, "Amount for '{}' must be a finite number", name)
            }
            Self::DueDayOutOfRange(day) => {
                write!(f, "Due day must be between 1 and 31, got {}", day)
            }
        }
    }
}

impl std::error::Error for BillValidationError {}

/// A recurring monthly bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    /// Display name (e.g., "Rent")
    pub name: String,
    /// Monthly amount in currency units
    pub amount: f64,
    /// Day of month the bill is due (1-31). When absent the bill is treated
    /// as due at the end of the cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
}

impl BillItem {
    /// Create a new bill
    pub fn new(name: impl Into<String>, amount: f64, due_day: Option<u32>) -> Self {
        Self {
            name: name.into(),
            amount,
            due_day,
        }
    }

    /// Validate the bill
    pub fn validate(&self) -> Result<(), BillValidationError> {
        if !self.amount.is_finite() {
            return Err(BillValidationError::NonFiniteAmount(self.name.clone()));
        }
        if self.amount < 0.0 {
            return Err(BillValidationError::NegativeAmount(self.name.clone()));
        }
        if let Some(day) = self.due_day {
            if !(1..=31).contains(&day) {
                return Err(BillValidationError::DueDayOutOfRange(day));
            }
        }
        Ok(())
    }

    /// Parse a bill from `name=amount[@due_day]` form
    ///
    /// Examples: "Rent=1200@1", "Netflix=15.99"
    pub fn parse(s: &str) -> Result<Self, BillParseError> {
        let s = s.trim();
        let (name, rest) = s
            .split_once('=')
            .ok_or_else(|| BillParseError::InvalidFormat(s.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(BillParseError::InvalidFormat(s.to_string()));
        }

        let (amount_str, due_day) = match rest.split_once('@') {
            Some((amount, due)) => {
                let due: u32 = due
                    .trim()
                    .parse()
                    .map_err(|_| BillParseError::InvalidDueDay(due.trim().to_string()))?;
                (amount, Some(due))
            }
            None => (rest, None),
        };

        let amount: f64 = amount_str
            .trim()
            .parse()
            .map_err(|_| BillParseError::InvalidAmount(amount_str.trim().to_string()))?;

        Ok(Self::new(name, amount, due_day))
    }
}

/// Error type for bill parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillParseError {
    InvalidFormat(String),
    InvalidAmount(String),
    InvalidDueDay(String),
}

impl std::fmt::Display for BillParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(s) => {
                write!(f, "Invalid bill format (expected name=amount[@due]): {}", s)
            }
            Self::InvalidAmount(s) => write!(f, "Invalid bill amount: {}", s),
            Self::InvalidDueDay(s) => write!(f, "Invalid due day: {}", s),
        }
    }
}

impl std::error::Error for BillParseError {}

/// How many days one allocation cycle spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
pub enum CycleMode {
    /// Always 30 days, regardless of the calendar
    #[default]
    #[serde(rename = "fixed-30")]
    #[value(name = "fixed-30")]
    Fixed30,
    /// The real length of the current month (28-31 days)
    #[serde(rename = "actual-month-length")]
    #[value(name = "actual-month-length")]
    ActualMonthLength,
}

/// How each bill's amount is spread over the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationMode {
    /// Spread evenly over the whole cycle
    #[default]
    Even,
    /// Sinking fund: divide by the days remaining until the due date
    UntilDue,
}

/// How computed amounts are rounded for display and export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Round to two decimal places
    #[default]
    NearestCent,
    /// Round up to the next whole currency unit
    RoundUpDollar,
}

impl RoundingMode {
    /// Apply this rounding policy to an amount
    ///
    /// Only used at presentation and export boundaries; the planner itself
    /// never rounds mid-calculation.
    pub fn apply(&self, amount: f64) -> f64 {
        match self {
            Self::NearestCent => (amount * 100.0).round() / 100.0,
            Self::RoundUpDollar => amount.ceil(),
        }
    }
}

/// Settings controlling the daily allocation planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AllocationSettings {
    /// Cycle length policy
    #[serde(default)]
    pub cycle_mode: CycleMode,
    /// Allocation policy
    #[serde(default)]
    pub allocation_mode: AllocationMode,
    /// Rounding policy for display/export
    #[serde(default)]
    pub rounding_mode: RoundingMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bill_with_due_day() {
        let bill = BillItem::parse("Rent=1200@1").unwrap();
        assert_eq!(bill.name, "Rent");
        assert_eq!(bill.amount, 1200.0);
        assert_eq!(bill.due_day, Some(1));
    }

    #[test]
    fn test_parse_bill_without_due_day() {
        let bill = BillItem::parse("Netflix=15.99").unwrap();
        assert_eq!(bill.name, "Netflix");
        assert_eq!(bill.amount, 15.99);
        assert_eq!(bill.due_day, None);
    }

    #[test]
    fn test_parse_bill_errors() {
        assert!(matches!(
            BillItem::parse("Rent"),
            Err(BillParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            BillItem::parse("Rent=abc"),
            Err(BillParseError::InvalidAmount(_))
        ));
        assert!(matches!(
            BillItem::parse("Rent=1200@first"),
            Err(BillParseError::InvalidDueDay(_))
        ));
    }

    #[test]
    fn test_validate_due_day_range() {
        assert!(BillItem::new("Rent", 1200.0, Some(31)).validate().is_ok());
        assert_eq!(
            BillItem::new("Rent", 1200.0, Some(0)).validate(),
            Err(BillValidationError::DueDayOutOfRange(0))
        );
        assert_eq!(
            BillItem::new("Rent", 1200.0, Some(32)).validate(),
            Err(BillValidationError::DueDayOutOfRange(32))
        );
    }

    #[test]
    fn test_rounding_modes() {
        assert_eq!(RoundingMode::NearestCent.apply(6.666_666), 6.67);
        assert_eq!(RoundingMode::NearestCent.apply(10.0), 10.0);
        assert_eq!(RoundingMode::RoundUpDollar.apply(6.01), 7.0);
        assert_eq!(RoundingMode::RoundUpDollar.apply(7.0), 7.0);
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = AllocationSettings {
            cycle_mode: CycleMode::ActualMonthLength,
            allocation_mode: AllocationMode::UntilDue,
            rounding_mode: RoundingMode::RoundUpDollar,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("actual-month-length"));
        assert!(json.contains("until-due"));
        let back: AllocationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = AllocationSettings::default();
        assert_eq!(settings.cycle_mode, CycleMode::Fixed30);
        assert_eq!(settings.allocation_mode, AllocationMode::Even);
        assert_eq!(settings.rounding_mode, RoundingMode::NearestCent);
    }
}
