//! Computation services for Fynix
//!
//! Each service is a pure, single-pass function over in-memory values: no
//! I/O, no shared state, no retained data. Callers construct the input
//! records, invoke a function, and receive a derived summary. Same inputs
//! always produce the same outputs.

pub mod allocation;
pub mod budget;
pub mod debt;
pub mod garnishment;
pub mod growth;

pub use allocation::{compute_daily_plan, DailyPlan, PlanTotals, PlannedBill};
pub use budget::{calculate_budget, calculate_budget_from_items, BudgetSummary};
pub use debt::{project_payoff, MonthBalance, PayoffProjection};
pub use garnishment::{calculate_garnishment, GarnishmentSummary};
pub use growth::{project_growth, GrowthProjection};
