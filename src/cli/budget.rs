//! Budget and garnishment CLI commands

use crate::config::Settings;
use crate::display::{format_budget_summary, format_garnishment_summary};
use crate::error::{FynixError, FynixResult};
use crate::models::ExpenseItem;
use crate::services::{calculate_budget, calculate_garnishment};

/// Handle the `budget` command
///
/// Expenses arrive as raw `category=amount` strings from repeated `-e`
/// flags.
pub fn handle_budget_command(
    income: f64,
    expenses: &[String],
    json: bool,
    settings: &Settings,
) -> FynixResult<()> {
    let expenses: Vec<ExpenseItem> = expenses
        .iter()
        .map(|raw| ExpenseItem::parse(raw).map_err(|e| FynixError::Parse(e.to_string())))
        .collect::<FynixResult<_>>()?;

    let summary = calculate_budget(income, &expenses)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!(
            "{}",
            format_budget_summary(&summary, &settings.currency_symbol)
        );
    }
    Ok(())
}

/// Handle the `garnish` command
pub fn handle_garnish_command(
    income: f64,
    rate: f64,
    json: bool,
    settings: &Settings,
) -> FynixResult<()> {
    let summary = calculate_garnishment(income, rate)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!(
            "{}",
            format_garnishment_summary(&summary, &settings.currency_symbol)
        );
    }
    Ok(())
}
