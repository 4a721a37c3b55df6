//! Category registry model
//!
//! Two independent ordered lists of category names, one per transaction
//! type. Names are normalized (trimmed, title-cased) before they are stored.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// Built-in expense categories for a fresh ledger
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] =
    &["Groceries", "Rent", "Transport", "Dining", "Utilities", "Other"];

/// Built-in income categories for a fresh ledger
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", "Gifts", "Other"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistry {
    #[serde(default = "default_expense")]
    pub expense: Vec<String>,

    #[serde(default = "default_income")]
    pub income: Vec<String>,
}

fn default_expense() -> Vec<String> {
    DEFAULT_EXPENSE_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

fn default_income() -> Vec<String> {
    DEFAULT_INCOME_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            expense: default_expense(),
            income: default_income(),
        }
    }
}

impl CategoryRegistry {
    /// Categories for a transaction type, in insertion order
    pub fn list(&self, kind: TransactionType) -> &[String] {
        match kind {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    /// Categories for a type given by name; unknown names yield an empty list
    pub fn list_named(&self, kind: &str) -> &[String] {
        match kind.parse::<TransactionType>() {
            Ok(kind) => self.list(kind),
            Err(_) => &[],
        }
    }

    pub fn contains(&self, kind: TransactionType, name: &str) -> bool {
        self.list(kind).iter().any(|c| c == name)
    }

    /// Append an already-normalized name. Returns false if it was present.
    pub fn insert(&mut self, kind: TransactionType, name: String) -> bool {
        if self.contains(kind, &name) {
            return false;
        }
        match kind {
            TransactionType::Income => self.income.push(name),
            TransactionType::Expense => self.expense.push(name),
        }
        true
    }
}

/// Trim and title-case a category name ("  eating OUT " -> "Eating Out")
///
/// A cased letter is upper-cased when it starts a run of cased letters and
/// lower-cased otherwise, so "o'neil's" becomes "O'Neil'S" and "3d prints"
/// "3D Prints". Uncased letters (CJK ideographs, for one) end a run.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.trim().chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.list(TransactionType::Expense).len(), 6);
        assert_eq!(registry.list(TransactionType::Income)[0], "Salary");
    }

    #[test]
    fn test_list_named_unknown_type_is_empty() {
        let registry = CategoryRegistry::default();
        assert!(registry.list_named("transfer").is_empty());
        assert_eq!(registry.list_named("income").len(), 4);
    }

    #[test]
    fn test_insert_is_idempotent_by_name() {
        let mut registry = CategoryRegistry::default();
        assert!(registry.insert(TransactionType::Expense, "Pets".into()));
        assert!(!registry.insert(TransactionType::Expense, "Pets".into()));
        assert_eq!(registry.expense.last().map(String::as_str), Some("Pets"));
        assert!(!registry.contains(TransactionType::Income, "Pets"));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  groceries "), "Groceries");
        assert_eq!(normalize_name("eating OUT"), "Eating Out");
        assert_eq!(normalize_name("3d prints"), "3D Prints");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_normalize_name_uncased_letters_split_words() {
        assert_eq!(normalize_name("日a"), "日A");
        assert_eq!(normalize_name("café 東京 bar"), "Café 東京 Bar");
        assert_eq!(normalize_name("ÉCOLE"), "École");
    }

    #[test]
    fn test_missing_lists_use_defaults() {
        let registry: CategoryRegistry = serde_json::from_str(r#"{"income": ["Salary"]}"#).unwrap();
        assert_eq!(registry.income, vec!["Salary".to_string()]);
        assert_eq!(registry.expense.len(), 6);
    }
}
