//! Budget aggregation service
//!
//! Sums tracked income and categorized expenses into a disposable-income
//! summary.

use serde::{Deserialize, Serialize};

use crate::error::{FynixError, FynixResult};
use crate::models::{ExpenseItem, IncomeItem};

/// Derived budget summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Total monthly income, unchanged from the input
    pub total_income: f64,
    /// Sum of all expense amounts
    pub total_expenses: f64,
    /// Income minus expenses; may be negative
    pub disposable_income: f64,
}

/// Aggregate income and expenses into a budget summary
///
/// The sum is order-independent and the result carries no clamping: a
/// caller spending more than they earn sees a negative disposable income.
///
/// # Errors
///
/// Returns `InvalidArgument` if the income or any expense amount is
/// negative or non-finite. Invalid input is rejected rather than coerced
/// to zero so that user mistakes surface instead of silently vanishing.
pub fn calculate_budget(income: f64, expenses: &[ExpenseItem]) -> FynixResult<BudgetSummary> {
    if !income.is_finite() {
        return Err(FynixError::invalid_argument(
            "income",
            "must be a finite number",
        ));
    }
    if income < 0.0 {
        return Err(FynixError::invalid_argument(
            "income",
            format!("must be non-negative, got {}", income),
        ));
    }

    let mut total_expenses = 0.0;
    for expense in expenses {
        expense
            .validate()
            .map_err(|e| FynixError::InvalidArgument(e.to_string()))?;
        total_expenses += expense.amount;
    }

    Ok(BudgetSummary {
        total_income: income,
        total_expenses,
        disposable_income: income - total_expenses,
    })
}

/// Aggregate itemized income sources and expenses into a budget summary
///
/// Convenience wrapper for callers that track income as a list of sources
/// rather than a single figure.
///
/// # Errors
///
/// Returns `InvalidArgument` if any income or expense amount is negative
/// or non-finite.
pub fn calculate_budget_from_items(
    incomes: &[IncomeItem],
    expenses: &[ExpenseItem],
) -> FynixResult<BudgetSummary> {
    let mut total_income = 0.0;
    for income in incomes {
        income
            .validate()
            .map_err(|e| FynixError::InvalidArgument(e.to_string()))?;
        total_income += income.amount;
    }
    calculate_budget(total_income, expenses)
}
