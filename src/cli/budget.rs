//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget, format_budget_status};
use crate::error::LedgerResult;
use crate::models::{Money, MonthPeriod};
use crate::services::LedgerService;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly spending limit, replacing any previous budget
    Set {
        /// Limit amount (e.g., "30000")
        #[arg(allow_negative_numbers = true)]
        amount: Money,
        /// Month the limit applies to (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<MonthPeriod>,
    },

    /// Show the budget and spending against it
    Show {
        /// Month to measure (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<MonthPeriod>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    service: &mut LedgerService,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Set { amount, month } => {
            let period = month.unwrap_or_else(MonthPeriod::current);
            let budget = service.set_budget(amount, period)?;
            print!("{}", format_budget(Some(budget), symbol));
        }

        BudgetCommands::Show { month } => {
            let period = month.unwrap_or_else(MonthPeriod::current);
            print!("{}", format_budget(service.current_budget(), symbol));

            match service.budget_status(period) {
                Some(status) => print!("{}", format_budget_status(&status, symbol)),
                None if service.current_budget().is_some() => {
                    println!("The current budget does not cover {}.", period)
                }
                None => {}
            }
        }
    }

    Ok(())
}
