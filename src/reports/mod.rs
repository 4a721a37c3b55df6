//! Reports module for Pocket Ledger
//!
//! Derived, non-persisted views over the ledger: the monthly dashboard
//! figures and the budget-versus-spending comparison.

pub mod budget_status;
pub mod monthly;

pub use budget_status::{budget_status, BudgetStatus};
pub use monthly::{parse_month_key, MonthlyReport};
