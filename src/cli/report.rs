//! Report CLI commands
//!
//! `report` prints the monthly summary and category chart; `dashboard`
//! adds the budget status for the current month.

use clap::Args;

use crate::display::format_budget_status;
use crate::error::LedgerResult;
use crate::reports::{parse_month_key, MonthlyReport};
use crate::services::{BudgetService, CurrencyService};
use crate::storage::Storage;

use super::today;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Month to report on (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
}

pub fn handle_report_command(storage: &mut Storage, args: ReportArgs) -> LedgerResult<()> {
    let day = match args.month {
        Some(key) => parse_month_key(&key)?,
        None => today(),
    };

    let symbol = CurrencyService::new(storage).symbol().to_string();
    let report = MonthlyReport::generate(&storage.state().transactions, day);
    print!("{}", report.format_terminal(&symbol));
    Ok(())
}

pub fn handle_dashboard_command(storage: &mut Storage) -> LedgerResult<()> {
    let symbol = CurrencyService::new(storage).symbol().to_string();
    let report = MonthlyReport::generate(&storage.state().transactions, today());
    let rows = BudgetService::new(storage).status(&report);

    print!("{}", report.format_terminal(&symbol));
    println!();
    println!("Budgets");
    print!("{}", format_budget_status(&rows, &symbol));
    Ok(())
}
