//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod currency;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use report::{handle_dashboard_command, handle_report_command, ReportArgs};
pub use transaction::{handle_add_command, handle_list_command, AddArgs, ListArgs};

use chrono::NaiveDate;

/// Today's date in the local time zone
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
