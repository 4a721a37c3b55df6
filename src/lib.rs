//! Pocket Ledger - single-user personal finance tracker
//!
//! This library provides the core of the Pocket Ledger application: a ledger
//! of income and expense transactions, per-type category lists, advisory
//! per-category budgets, a display currency symbol and the monthly report
//! computed from all of that. The whole state lives in one JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (transactions, categories, budgets, money)
//! - `storage`: JSON document persistence
//! - `services`: Validation and mutation logic
//! - `reports`: Monthly report and budget status
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `pocket` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use pocket_ledger::models::TransactionType;
//! use pocket_ledger::services::TransactionService;
//! use pocket_ledger::storage::Storage;
//!
//! let mut storage = Storage::open_file("ledger.json");
//! TransactionService::new(&mut storage)
//!     .add(TransactionType::Expense, "12.50", "Dining", "Lunch", "2024-05-02")?;
//! # Ok::<(), pocket_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
