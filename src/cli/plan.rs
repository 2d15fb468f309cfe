//! Daily allocation plan CLI command

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::display::format_daily_plan;
use crate::error::{FynixError, FynixResult};
use crate::models::{AllocationMode, AllocationSettings, BillItem, CycleMode, RoundingMode};
use crate::services::compute_daily_plan;

/// Options for the `plan` command, merged from flags and saved settings
pub struct PlanOptions<'a> {
    /// Raw `name=amount[@due]` strings from repeated `-b` flags
    pub bills: &'a [String],
    /// Optional JSON file holding an array of bills
    pub file: Option<&'a Path>,
    /// Cycle-length override
    pub cycle: Option<CycleMode>,
    /// Allocation-mode override
    pub alloc: Option<AllocationMode>,
    /// Rounding override
    pub round: Option<RoundingMode>,
    /// Plan date override (YYYY-MM-DD); defaults to today
    pub date: Option<&'a str>,
    /// Emit JSON instead of a table
    pub json: bool,
}

/// Handle the `plan` command
///
/// Bills come from an optional JSON file followed by any `-b` flags, in
/// that order. Flags override the saved allocation settings. JSON output
/// carries the unrounded values so downstream callers can apply their own
/// rounding; the table applies the configured rounding mode.
pub fn handle_plan_command(options: PlanOptions<'_>, settings: &Settings) -> FynixResult<()> {
    let mut bills: Vec<BillItem> = Vec::new();

    if let Some(path) = options.file {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FynixError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let from_file: Vec<BillItem> = serde_json::from_str(&contents)
            .map_err(|e| FynixError::Json(format!("Failed to parse {}: {}", path.display(), e)))?;
        bills.extend(from_file);
    }

    for raw in options.bills {
        let bill = BillItem::parse(raw).map_err(|e| FynixError::Parse(e.to_string()))?;
        bills.push(bill);
    }

    let today = match options.date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| FynixError::Parse(format!("Invalid date '{}': {}", s, e)))?,
        None => Local::now().date_naive(),
    };

    let allocation = AllocationSettings {
        cycle_mode: options.cycle.unwrap_or(settings.allocation.cycle_mode),
        allocation_mode: options.alloc.unwrap_or(settings.allocation.allocation_mode),
        rounding_mode: options.round.unwrap_or(settings.allocation.rounding_mode),
    };

    let plan = compute_daily_plan(&bills, &allocation, today)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!(
            "{}",
            format_daily_plan(&plan, allocation.rounding_mode, &settings.currency_symbol)
        );
    }
    Ok(())
}
