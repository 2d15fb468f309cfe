//! Debt payoff projection service
//!
//! Simulates fixed-payment amortization of a single balance month by month
//! until payoff or a hard 50-year cap.

use serde::{Deserialize, Serialize};

use crate::error::{FynixError, FynixResult};
use crate::models::DebtInput;

/// Hard cap on simulated months (50 years). Guarantees termination even
/// when floating-point drift keeps a tiny residual balance alive.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Balance remaining after a given month of payments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthBalance {
    /// Month number, starting at 1
    pub month: u32,
    /// Balance remaining after that month's payment
    pub balance: f64,
}

/// Outcome of a debt payoff projection
///
/// A payment that never exceeds the accruing interest is a legitimate
/// business outcome the caller must display, so it is modeled as a variant
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum PayoffProjection {
    /// The balance amortizes under the given payment
    Amortized {
        /// Number of monthly payments simulated
        months: u32,
        /// Total interest paid over the projection
        total_interest: f64,
        /// Month-by-month balance series
        schedule: Vec<MonthBalance>,
    },
    /// The payment does not cover the accruing interest; the balance never
    /// reaches zero
    NeverPaysOff,
}

impl PayoffProjection {
    /// Check if this projection never reaches zero
    pub fn is_never_pays_off(&self) -> bool {
        matches!(self, Self::NeverPaysOff)
    }

    /// Number of months to payoff, if the debt amortizes
    pub fn months(&self) -> Option<u32> {
        match self {
            Self::Amortized { months, .. } => Some(*months),
            Self::NeverPaysOff => None,
        }
    }
}

/// Project the payoff of a debt under a fixed monthly payment
///
/// Iterates month by month: interest accrues at `apr / 100 / 12`, the
/// payment covers interest first, and the remainder reduces the balance
/// (floored at zero). No rounding is applied mid-loop; rounding is a
/// presentation concern.
///
/// # Errors
///
/// Returns `InvalidArgument` if any input is negative or non-finite.
pub fn project_payoff(debt: &DebtInput) -> FynixResult<PayoffProjection> {
    debt.validate()
        .map_err(|e| FynixError::InvalidArgument(e.to_string()))?;

    let rate = debt.monthly_rate();
    if debt.balance > 0.0 && debt.payment <= debt.balance * rate {
        return Ok(PayoffProjection::NeverPaysOff);
    }

    let mut balance = debt.balance;
    let mut total_interest = 0.0;
    let mut schedule = Vec::new();
    let mut months = 0;

    while balance > 0.0 && months < MAX_PAYOFF_MONTHS {
        let interest = balance * rate;
        let principal = debt.payment - interest;
        balance = (balance - principal).max(0.0);
        total_interest += interest;
        months += 1;
        schedule.push(MonthBalance {
            month: months,
            balance,
        });
    }

    Ok(PayoffProjection::Amortized {
        months,
        total_interest,
        schedule,
    })
}
