//! Service layer for Pocket Ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation of user-entered text and persisting every change.

pub mod budget;
pub mod category;
pub mod currency;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use currency::CurrencyService;
pub use transaction::{TransactionFilter, TransactionService};
