//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the computation services.

pub mod budget;
pub mod plan;
pub mod projection;

pub use budget::{handle_budget_command, handle_garnish_command};
pub use plan::handle_plan_command;
pub use projection::{handle_growth_command, handle_payoff_command};
