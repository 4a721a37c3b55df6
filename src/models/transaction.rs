//! Transaction model
//!
//! Represents a single income or expense entry in the ledger. Transactions
//! are created once and never edited; the ledger owns them exclusively.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::LedgerError;

/// Date format used for storage and user input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential identifier, assigned as ledger length + 1
    pub id: u32,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always non-negative; direction comes from `kind`
    pub amount: Money,

    pub category: String,

    #[serde(default)]
    pub description: String,

    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction. The amount is stored as its absolute value.
    pub fn new(
        id: u32,
        kind: TransactionType,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            amount: amount.abs(),
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Whether this transaction falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.date.year() == year && self.date.month() == month
    }
}

/// Parse a date strictly in `YYYY-MM-DD` form
///
/// Rejects unpadded fields ("2024-1-5"), other orderings ("01-01-2024") and
/// impossible dates ("2024-02-30").
pub fn parse_date(s: &str) -> Result<NaiveDate, LedgerError> {
    let invalid = || LedgerError::InvalidDate(s.to_string());
    let bytes = s.as_bytes();

    if bytes.len() != 10 {
        return Err(invalid());
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_absolute_amount() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let txn = Transaction::new(
            1,
            TransactionType::Expense,
            Money::from_cents(-2500),
            "Dining",
            "",
            date,
        );
        assert_eq!(txn.amount.cents(), 2500);
        assert!(txn.is_expense());
        assert!(txn.in_month(2024, 3));
        assert!(!txn.in_month(2024, 4));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(parse_date("2024-13-40"), Err(LedgerError::InvalidDate(_))));
        assert!(matches!(parse_date("01-01-2024"), Err(LedgerError::InvalidDate(_))));
        assert!(matches!(parse_date("2023-02-29"), Err(LedgerError::InvalidDate(_))));
        assert!(matches!(parse_date("2024-1-05"), Err(LedgerError::InvalidDate(_))));
        assert!(matches!(parse_date(""), Err(LedgerError::InvalidDate(_))));
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("expense".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_serialization_shape() {
        let txn = Transaction::new(
            7,
            TransactionType::Income,
            Money::from_cents(100000),
            "Salary",
            "March pay",
            NaiveDate::from_ymd_opt(2024, 3, 25).unwrap(),
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["type"], "income");
        assert_eq!(value["amount"], 1000.0);
        assert_eq!(value["date"], "2024-03-25");
        assert_eq!(value["description"], "March pay");
    }
}
