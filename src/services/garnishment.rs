//! Wage garnishment service
//!
//! Applies a flat garnishment rate to income. This is deliberately a flat
//! model; it does not implement consumer-protection disposable-earnings
//! caps.

use serde::{Deserialize, Serialize};

use crate::error::{FynixError, FynixResult};

/// Derived garnishment summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GarnishmentSummary {
    /// Amount withheld from income
    pub garnishment: f64,
    /// Income remaining after withholding
    pub remaining_income: f64,
}

/// Compute the garnished and remaining portions of an income
///
/// # Errors
///
/// Returns `InvalidArgument` if `income` is negative or non-finite, or if
/// `rate` is outside `[0, 1]`.
pub fn calculate_garnishment(income: f64, rate: f64) -> FynixResult<GarnishmentSummary> {
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
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(FynixError::invalid_argument(
            "rate",
            format!("must be between 0 and 1, got {}", rate),
        ));
    }

    let garnishment = income * rate;
    Ok(GarnishmentSummary {
        garnishment,
        remaining_income: income - garnishment,
    })
}
