//! Debt payoff and compound growth CLI commands

use crate::config::Settings;
use crate::display::{format_growth, format_payoff};
use crate::error::FynixResult;
use crate::models::{DebtInput, InvestInput};
use crate::services::{project_growth, project_payoff};

/// Handle the `payoff` command
pub fn handle_payoff_command(
    balance: f64,
    apr: f64,
    payment: f64,
    schedule: bool,
    json: bool,
    settings: &Settings,
) -> FynixResult<()> {
    let projection = project_payoff(&DebtInput::new(balance, apr, payment))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        print!(
            "{}",
            format_payoff(&projection, schedule, &settings.currency_symbol)
        );
    }
    Ok(())
}

/// Handle the `growth` command
pub fn handle_growth_command(
    principal: f64,
    monthly: f64,
    rate: f64,
    years: u32,
    json: bool,
    settings: &Settings,
) -> FynixResult<()> {
    let projection = project_growth(&InvestInput::new(principal, monthly, rate, years))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        print!(
            "{}",
            format_growth(&projection, &settings.currency_symbol)
        );
    }
    Ok(())
}
