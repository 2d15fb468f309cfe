//! Payoff and growth projection formatting

use super::format_currency;
use crate::services::{GrowthProjection, PayoffProjection};

/// Format a payoff projection
///
/// Shows the headline months/interest figures, and optionally the full
/// month-by-month schedule.
pub fn format_payoff(projection: &PayoffProjection, show_schedule: bool, symbol: &str) -> String {
    match projection {
        PayoffProjection::NeverPaysOff => {
            "This payment never pays off the balance: it does not cover the \
             interest accruing each month.\n"
                .to_string()
        }
        PayoffProjection::Amortized {
            months,
            total_interest,
            schedule,
        } => {
            let years = *months / 12;
            let rem_months = *months % 12;
            let residual = schedule.last().map(|e| e.balance).unwrap_or(0.0);
            let mut output = String::new();
            if residual > 0.0 {
                // The projection hit the iteration cap with a balance left.
                output.push_str(&format!(
                    "Not paid off within {} months ({} years {} months); {} still owing.\n",
                    months,
                    years,
                    rem_months,
                    format_currency(residual, symbol)
                ));
            } else {
                output.push_str(&format!(
                    "Paid off in {} months ({} years {} months)\n",
                    months, years, rem_months
                ));
            }
            output.push_str(&format!(
                "Total interest paid: {}\n",
                format_currency(*total_interest, symbol)
            ));

            if show_schedule {
                output.push('\n');
                output.push_str(&format!("{:>5}  {:>14}\n", "Month", "Balance"));
                output.push_str(&format!("{:->5}  {:->14}\n", "", ""));
                for entry in schedule {
                    output.push_str(&format!(
                        "{:>5}  {:>14}\n",
                        entry.month,
                        format_currency(entry.balance, symbol)
                    ));
                }
            }
            output
        }
    }
}

/// Format a growth projection as year-end milestones
pub fn format_growth(projection: &GrowthProjection, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:>5}  {:>14}\n", "Year", "Balance"));
    output.push_str(&format!("{:->5}  {:->14}\n", "", ""));

    let years = projection.series.len().saturating_sub(1) / 12;
    for year in 0..=years {
        if let Some(balance) = projection.balance_at_year(year as u32) {
            output.push_str(&format!(
                "{:>5}  {:>14}\n",
                year,
                format_currency(balance, symbol)
            ));
        }
    }
    output
}
