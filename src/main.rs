use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fynix::cli::{
    handle_budget_command, handle_garnish_command, handle_growth_command, handle_payoff_command,
    handle_plan_command,
};
use fynix::cli::plan::PlanOptions;
use fynix::config::{FynixPaths, Settings};
use fynix::models::{AllocationMode, CycleMode, RoundingMode};

#[derive(Parser)]
#[command(
    name = "fynix",
    version,
    about = "Personal-finance calculators for the terminal",
    long_about = "Fynix bundles the calculators behind the Fynix personal-finance \
                  dashboard: budget aggregation, wage garnishment, debt payoff \
                  projection, compound growth projection, and a daily bill \
                  allocation planner."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize income and expenses into disposable income
    Budget {
        /// Monthly income
        #[arg(short, long)]
        income: f64,
        /// Expense as category=amount (repeatable)
        #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT")]
        expenses: Vec<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Apply a flat wage-garnishment rate to an income
    Garnish {
        /// Monthly income
        #[arg(short, long)]
        income: f64,
        /// Garnishment rate between 0 and 1 (e.g., 0.25)
        #[arg(short, long)]
        rate: f64,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Project how long a fixed payment takes to clear a debt
    Payoff {
        /// Current balance
        #[arg(short, long)]
        balance: f64,
        /// Annual percentage rate (e.g., 24 for 24%)
        #[arg(short, long)]
        apr: f64,
        /// Fixed monthly payment
        #[arg(short, long)]
        payment: f64,
        /// Show the month-by-month balance schedule
        #[arg(short, long)]
        schedule: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Project compound growth with monthly contributions
    Growth {
        /// Starting principal
        #[arg(short = 'P', long)]
        principal: f64,
        /// Monthly contribution
        #[arg(short, long, default_value = "0")]
        monthly: f64,
        /// Annual growth rate as a percentage (e.g., 6 for 6%)
        #[arg(short, long)]
        rate: f64,
        /// Projection horizon in years
        #[arg(short, long)]
        years: u32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Plan daily set-asides for monthly bills
    Plan {
        /// Bill as name=amount[@due_day] (repeatable)
        #[arg(short, long = "bill", value_name = "NAME=AMOUNT[@DUE]")]
        bills: Vec<String>,
        /// JSON file holding an array of bills
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Cycle length policy (overrides saved settings)
        #[arg(long)]
        cycle: Option<CycleMode>,
        /// Allocation policy (overrides saved settings)
        #[arg(long)]
        alloc: Option<AllocationMode>,
        /// Rounding policy (overrides saved settings)
        #[arg(long)]
        round: Option<RoundingMode>,
        /// Date to plan for (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FynixPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Budget {
            income,
            expenses,
            json,
        } => handle_budget_command(income, &expenses, json, &settings)?,

        Commands::Garnish { income, rate, json } => {
            handle_garnish_command(income, rate, json, &settings)?
        }

        Commands::Payoff {
            balance,
            apr,
            payment,
            schedule,
            json,
        } => handle_payoff_command(balance, apr, payment, schedule, json, &settings)?,

        Commands::Growth {
            principal,
            monthly,
            rate,
            years,
            json,
        } => handle_growth_command(principal, monthly, rate, years, json, &settings)?,

        Commands::Plan {
            bills,
            file,
            cycle,
            alloc,
            round,
            date,
            json,
        } => handle_plan_command(
            PlanOptions {
                bills: &bills,
                file: file.as_deref(),
                cycle,
                alloc,
                round,
                date: date.as_deref(),
                json,
            },
            &settings,
        )?,

        Commands::Config => {
            println!("Settings file: {}", paths.settings_file().display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
