//! Core data models for Pocket Ledger
//!
//! This module contains the data structures persisted in the ledger file:
//! transactions, the category registry, budgets and the currency selection.

pub mod budget;
pub mod category;
pub mod currency;
pub mod money;
pub mod state;
pub mod transaction;

pub use budget::BudgetTable;
pub use category::{normalize_name, CategoryRegistry};
pub use currency::{currency_name, CURRENCIES, DEFAULT_CURRENCY_SYMBOL};
pub use money::Money;
pub use state::LedgerState;
pub use transaction::{parse_date, Transaction, TransactionType};
