//! Daily allocation plan formatting
//!
//! Renders the plan as a table. This is the one place the rounding policy
//! is applied.

use super::format_currency;
use crate::models::RoundingMode;
use crate::services::DailyPlan;

/// Format a daily allocation plan as a table with a totals row
pub fn format_daily_plan(plan: &DailyPlan, rounding: RoundingMode, symbol: &str) -> String {
    if plan.bills.is_empty() {
        return "No bills to plan.".to_string();
    }

    let name_width = plan
        .bills
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "Plan for {} ({}-day cycle)\n\n",
        plan.today.format("%Y-%m-%d"),
        plan.cycle_days
    ));

    output.push_str(&format!(
        "{:<name_width$}  {:>10}  {:>4}  {:>10}  {:>10}  {:>10}\n",
        "Name",
        "Amount",
        "Due",
        "Per Day",
        "Per Week",
        "Bi-Weekly",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->10}  {:->4}  {:->10}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for bill in &plan.bills {
        let due = match bill.due_day {
            Some(day) => day.to_string(),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<name_width$}  {:>10}  {:>4}  {:>10}  {:>10}  {:>10}\n",
            bill.name,
            format_currency(bill.amount, symbol),
            due,
            format_currency(rounding.apply(bill.per_day), symbol),
            format_currency(rounding.apply(bill.per_week), symbol),
            format_currency(rounding.apply(bill.per_bi_weekly), symbol),
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:->10}  {:->4}  {:->10}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    let total_amount: f64 = plan.bills.iter().map(|b| b.amount).sum();
    output.push_str(&format!(
        "{:<name_width$}  {:>10}  {:>4}  {:>10}  {:>10}  {:>10}\n",
        "Total",
        format_currency(total_amount, symbol),
        "",
        format_currency(rounding.apply(plan.totals.per_day), symbol),
        format_currency(rounding.apply(plan.totals.per_week), symbol),
        format_currency(rounding.apply(plan.totals.per_bi_weekly), symbol),
        name_width = name_width,
    ));

    output
}
