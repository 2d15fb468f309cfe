//! Budget and garnishment summary formatting

use super::format_currency;
use crate::services::{BudgetSummary, GarnishmentSummary};

/// Format a budget summary as aligned label/value lines
pub fn format_budget_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<20}{:>14}\n",
        "Total income",
        format_currency(summary.total_income, symbol)
    ));
    output.push_str(&format!(
        "{:<20}{:>14}\n",
        "Total expenses",
        format_currency(summary.total_expenses, symbol)
    ));
    output.push_str(&format!("{:-<34}\n", ""));
    output.push_str(&format!(
        "{:<20}{:>14}\n",
        "Disposable income",
        format_currency(summary.disposable_income, symbol)
    ));
    output
}

/// Format a garnishment summary as aligned label/value lines
pub fn format_garnishment_summary(summary: &GarnishmentSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<20}{:>14}\n",
        "Garnishment",
        format_currency(summary.garnishment, symbol)
    ));
    output.push_str(&format!(
        "{:<20}{:>14}\n",
        "Remaining income",
        format_currency(summary.remaining_income, symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_summary_lines() {
        let summary = BudgetSummary {
            total_income: 5000.0,
            total_expenses: 1500.0,
            disposable_income: 3500.0,
        };
        let output = format_budget_summary(&summary, "$");
        assert!(output.contains("$5000.00"));
        assert!(output.contains("$1500.00"));
        assert!(output.contains("$3500.00"));
    }

    #[test]
    fn test_garnishment_summary_lines() {
        let summary = GarnishmentSummary {
            garnishment: 1000.0,
            remaining_income: 3000.0,
        };
        let output = format_garnishment_summary(&summary, "$");
        assert!(output.contains("$1000.00"));
        assert!(output.contains("$3000.00"));
    }
}
