//! Display formatting for terminal output
//!
//! Turns ledger data into text. Nothing here reads or changes state.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use report::{format_bar, format_budget_status, format_percentage, separator, truncate};
pub use transaction::{added_message, format_transaction_table};
