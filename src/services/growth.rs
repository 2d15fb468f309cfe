//! Compound growth projection service
//!
//! Projects monthly-contribution compound growth of a principal over a
//! number of years.

use serde::{Deserialize, Serialize};

use crate::error::{FynixError, FynixResult};
use crate::models::InvestInput;

/// A month-by-month balance projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// Balances per month, starting with the principal at month 0.
    /// Always `years * 12 + 1` entries.
    pub series: Vec<f64>,
}

impl GrowthProjection {
    /// The projected balance at the end of the horizon
    pub fn final_balance(&self) -> f64 {
        *self.series.last().unwrap_or(&0.0)
    }

    /// The balance at the end of a given year (0 = start)
    pub fn balance_at_year(&self, year: u32) -> Option<f64> {
        self.series.get(year as usize * 12).copied()
    }
}

/// Project compound growth with fixed monthly contributions
///
/// Each month the balance grows by `rate / 100 / 12` and the contribution
/// is added afterwards.
///
/// # Errors
///
/// Returns `InvalidArgument` if any amount is negative or non-finite, or
/// if `years` is zero.
pub fn project_growth(input: &InvestInput) -> FynixResult<GrowthProjection> {
    input
        .validate()
        .map_err(|e| FynixError::InvalidArgument(e.to_string()))?;

    let rate = input.monthly_rate();
    let months = input.years * 12;
    let mut series = Vec::with_capacity(months as usize + 1);
    let mut balance = input.principal;
    series.push(balance);

    for _ in 1..=months {
        balance = balance * (1.0 + rate) + input.monthly;
        series.push(balance);
    }

    Ok(GrowthProjection { series })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_length() {
        let projection = project_growth(&InvestInput::new(1000.0, 100.0, 6.0, 1)).unwrap();
        assert_eq!(projection.series.len(), 13);
        assert_eq!(projection.series[0], 1000.0);
    }

    #[test]
    fn test_grows_with_contributions() {
        let projection = project_growth(&InvestInput::new(1000.0, 100.0, 6.0, 1)).unwrap();
        assert!(projection.final_balance() > projection.series[0]);
        for pair in projection.series.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_first_month_closed_form() {
        let projection = project_growth(&InvestInput::new(1000.0, 100.0, 6.0, 1)).unwrap();
        // 1000 * 1.005 + 100
        assert!((projection.series[1] - 1105.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let projection = project_growth(&InvestInput::new(0.0, 50.0, 0.0, 2)).unwrap();
        assert_eq!(projection.series.len(), 25);
        assert!((projection.final_balance() - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_balance_at_year() {
        let projection = project_growth(&InvestInput::new(1000.0, 0.0, 0.0, 3)).unwrap();
        assert_eq!(projection.balance_at_year(0), Some(1000.0));
        assert_eq!(projection.balance_at_year(3), Some(1000.0));
        assert_eq!(projection.balance_at_year(4), None);
    }

    #[test]
    fn test_rejects_zero_years() {
        assert!(project_growth(&InvestInput::new(1000.0, 100.0, 6.0, 0))
            .unwrap_err()
            .is_invalid_argument());
    }
}
