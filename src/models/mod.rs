//! Core data models for Fynix
//!
//! This module contains the input value records consumed by the computation
//! services: income and expense items, debt and investment inputs, bills,
//! and allocation settings. Every record is an immutable value owned by the
//! caller; the services never retain or mutate them.

pub mod bill;
pub mod budget;
pub mod debt;
pub mod invest;

pub use bill::{AllocationMode, AllocationSettings, BillItem, CycleMode, RoundingMode};
pub use budget::{ExpenseItem, IncomeItem};
pub use debt::DebtInput;
pub use invest::InvestInput;
