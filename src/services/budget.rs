//! Budget service
//!
//! Sets per-category spending ceilings and compares them with a month's
//! report. Budget keys are not checked against the category registry.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetTable, Money};
use crate::reports::{budget_status, BudgetStatus, MonthlyReport};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// All budgets, keyed by category name
    pub fn get_all(&self) -> &BudgetTable {
        &self.storage.state().budgets
    }

    /// Insert or overwrite the ceiling for `category`
    pub fn set(&mut self, category: &str, amount: &str) -> LedgerResult<Money> {
        // Sign is taken from the raw number so "-0.001" is negative, not zero
        let raw = amount.trim();
        if raw.parse::<f64>().map_or(false, |value| value < 0.0) {
            return Err(LedgerError::NegativeAmount(raw.to_string()));
        }
        let limit = Money::parse(amount)?;

        let previous = self.storage.state_mut().budgets.set(category, limit);
        self.storage.persist();
        debug!(category, limit = %limit, ?previous, "Set budget");

        Ok(limit)
    }

    /// Each budget against the spending in `report`
    pub fn status(&self, report: &MonthlyReport) -> Vec<BudgetStatus> {
        budget_status(self.get_all(), report)
    }
}
