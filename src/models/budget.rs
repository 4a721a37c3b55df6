//! Budget table model
//!
//! Maps an expense category name to an advisory monthly ceiling. Keys are
//! not checked against the category registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetTable(BTreeMap<String, Money>);

impl BudgetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a ceiling, returning the previous one
    pub fn set(&mut self, category: impl Into<String>, limit: Money) -> Option<Money> {
        self.0.insert(category.into(), limit)
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Money)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert() {
        let mut budgets = BudgetTable::new();
        assert_eq!(budgets.set("Rent", Money::from_cents(50000)), None);
        assert_eq!(
            budgets.set("Rent", Money::from_cents(60000)),
            Some(Money::from_cents(50000))
        );
        assert_eq!(budgets.get("Rent"), Some(Money::from_cents(60000)));
        assert_eq!(budgets.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut budgets = BudgetTable::new();
        budgets.set("Rent", Money::from_cents(50000));
        assert_eq!(serde_json::to_string(&budgets).unwrap(), r#"{"Rent":500.0}"#);
    }
}
