//! Budget CLI commands

use clap::Subcommand;

use crate::display::format_budget_status;
use crate::error::LedgerResult;
use crate::reports::MonthlyReport;
use crate::services::{BudgetService, CurrencyService};
use crate::storage::Storage;

use super::today;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show budgets against this month's spending
    List,

    /// Set or replace the budget for a category
    Set {
        /// Expense category name
        category: String,
        /// Ceiling amount (e.g. "500")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &mut Storage, cmd: BudgetCommands) -> LedgerResult<()> {
    let symbol = CurrencyService::new(storage).symbol().to_string();

    match cmd {
        BudgetCommands::List => {
            let report = MonthlyReport::generate(&storage.state().transactions, today());
            let rows = BudgetService::new(storage).status(&report);
            println!("Budgets for {}", report.month_name);
            print!("{}", format_budget_status(&rows, &symbol));
        }

        BudgetCommands::Set { category, amount } => {
            let limit = BudgetService::new(storage).set(&category, &amount)?;
            println!(
                "Budget for {} set to {}.",
                category,
                limit.format_with_symbol(&symbol)
            );
        }
    }

    Ok(())
}
