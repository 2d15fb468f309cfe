//! Fynix - Personal-finance calculation toolkit
//!
//! This library provides the calculation core behind the Fynix personal
//! finance tools: budget aggregation, wage garnishment, debt payoff
//! projection, compound growth projection, and daily bill allocation.
//! Every computation is a pure function over caller-owned value records;
//! nothing here performs I/O or retains state, so the functions can be
//! called from any context without coordination.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Input value records (incomes, expenses, debts, bills)
//! - `services`: The five pure computations and their output records
//! - `display`: Terminal formatting (where rounding is applied)
//! - `config`: CLI configuration and path management
//! - `cli`: CLI command handlers
//!
//! # Example
//!
//! ```rust
//! use fynix::models::ExpenseItem;
//! use fynix::services::calculate_budget;
//!
//! let expenses = vec![
//!     ExpenseItem::new("e1", "rent", 1000.0),
//!     ExpenseItem::new("e2", "food", 500.0),
//! ];
//! let summary = calculate_budget(5000.0, &expenses).unwrap();
//! assert_eq!(summary.disposable_income, 3500.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{FynixError, FynixResult};
