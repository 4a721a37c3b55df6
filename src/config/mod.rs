//! Configuration module for Pocket Ledger
//!
//! Resolves where the ledger file lives. There are no user settings beyond
//! the data location; the selected currency is part of the ledger itself.

pub mod paths;

pub use paths::LedgerPaths;
