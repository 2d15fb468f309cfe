//! Daily allocation planner
//!
//! Converts a set of monthly bills into a daily set-aside amount under the
//! configured cycle-length and allocation policies. The "until due" mode
//! builds a sinking fund: each bill's amount is divided by the days left
//! until its due date, wrapping into the next cycle when the date has
//! already passed.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{FynixError, FynixResult};
use crate::models::{AllocationMode, AllocationSettings, BillItem, CycleMode};

/// A bill with its computed set-aside amounts
///
/// The identity fields are echoed from the input bill so callers can
/// correlate results with their own records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedBill {
    /// The bill's name, unchanged
    pub name: String,
    /// The bill's monthly amount, unchanged
    pub amount: f64,
    /// The bill's due day, unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
    /// Amount to set aside per day
    pub per_day: f64,
    /// Amount to set aside per week
    pub per_week: f64,
    /// Amount to set aside per two weeks
    pub per_bi_weekly: f64,
}

/// Aggregate set-aside totals across all bills
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlanTotals {
    pub per_day: f64,
    pub per_week: f64,
    pub per_bi_weekly: f64,
}

/// The full daily allocation plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// The date the plan was computed for
    pub today: NaiveDate,
    /// The cycle length in days the amounts were spread over
    pub cycle_days: u32,
    /// Planned bills, in input order
    pub bills: Vec<PlannedBill>,
    /// Sums across all bills
    pub totals: PlanTotals,
}

/// Compute a daily allocation plan for the given bills
///
/// Cycle length is 30 days in `Fixed30` mode, or the real length of
/// `today`'s month otherwise. In `Even` mode each bill is spread over the
/// whole cycle; in `UntilDue` mode it is divided by the days remaining
/// until its due date (inclusive), so a bill due today must be covered in
/// full today. Due days beyond the cycle length are clamped to the last
/// day; a bill without a due day is treated as due at the end of the
/// cycle. No rounding is applied here.
///
/// # Errors
///
/// Returns `InvalidArgument` if any bill has a negative or non-finite
/// amount, or a due day outside 1-31.
pub fn compute_daily_plan(
    bills: &[BillItem],
    settings: &AllocationSettings,
    today: NaiveDate,
) -> FynixResult<DailyPlan> {
    for bill in bills {
        bill.validate()
            .map_err(|e| FynixError::InvalidArgument(e.to_string()))?;
    }

    let cycle_days = match settings.cycle_mode {
        CycleMode::Fixed30 => 30,
        CycleMode::ActualMonthLength => days_in_month(today),
    };
    let today_of_month = today.day();

    let planned: Vec<PlannedBill> = bills
        .iter()
        .map(|bill| {
            let per_day = match settings.allocation_mode {
                AllocationMode::Even => bill.amount / cycle_days as f64,
                AllocationMode::UntilDue => {
                    let remaining = remaining_days(bill.due_day, today_of_month, cycle_days);
                    bill.amount / remaining as f64
                }
            };
            PlannedBill {
                name: bill.name.clone(),
                amount: bill.amount,
                due_day: bill.due_day,
                per_day,
                per_week: per_day * 7.0,
                per_bi_weekly: per_day * 14.0,
            }
        })
        .collect();

    let totals = planned.iter().fold(PlanTotals::default(), |acc, bill| PlanTotals {
        per_day: acc.per_day + bill.per_day,
        per_week: acc.per_week + bill.per_week,
        per_bi_weekly: acc.per_bi_weekly + bill.per_bi_weekly,
    });

    Ok(DailyPlan {
        today,
        cycle_days,
        bills: planned,
        totals,
    })
}

/// Days remaining until the due day, inclusive of today
///
/// A due day earlier in the month than today wraps into the next cycle. A
/// missing due day means the end of the cycle; due days past the end of a
/// short month are clamped to its last day.
fn remaining_days(due_day: Option<u32>, today_of_month: u32, cycle_days: u32) -> u32 {
    let due = due_day.unwrap_or(cycle_days).clamp(1, cycle_days);
    if due >= today_of_month {
        due - today_of_month + 1
    } else {
        cycle_days - today_of_month + due + 1
    }
}

/// The number of days in the month containing `date`
fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // First of a valid month always exists.
    let last = first_of_next.expect("valid date") - Duration::days(1);
    last.day()
}
