//! Ledger root state
//!
//! The whole persisted document: transactions, categories, budgets and the
//! selected currency symbol. Each top-level key falls back to its default
//! when missing from the file.

use serde::{Deserialize, Serialize};

use super::budget::BudgetTable;
use super::category::CategoryRegistry;
use super::currency::default_currency_symbol;
use super::transaction::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Kept sorted by date, newest first
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub categories: CategoryRegistry,

    #[serde(default)]
    pub budgets: BudgetTable,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            categories: CategoryRegistry::default(),
            budgets: BudgetTable::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}
