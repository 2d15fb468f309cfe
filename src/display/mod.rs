//! Display formatting for terminal output
//!
//! Formats computation results for the terminal. The rounding policy from
//! the allocation settings is applied here, at the presentation boundary,
//! never inside the computations.

pub mod plan;
pub mod projection;
pub mod summary;

pub use plan::format_daily_plan;
pub use projection::{format_growth, format_payoff};
pub use summary::{format_budget_summary, format_garnishment_summary};

/// Format an amount with a currency symbol and two decimal places
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1050.5, "$"), "$1050.50");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(-42.129, "$"), "-$42.13");
        assert_eq!(format_currency(7.0, "€"), "€7.00");
    }
}
