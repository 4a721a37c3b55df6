//! Monthly Report
//!
//! Income, expense and savings totals for one calendar month, plus the
//! month's spending broken down by expense category. Computed fresh from
//! the ledger on every call; nothing here is persisted.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionType};

const CHART_WIDTH: usize = 30;

/// Aggregate figures for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    /// Human-readable label, e.g. "March 2024"
    pub month_name: String,
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; negative when overspent
    pub net_savings: Money,
    /// Expense totals per category. Categories without spending are absent.
    pub spending_by_category: BTreeMap<String, Money>,
    /// Number of transactions in the month
    pub transaction_count: usize,
}

impl MonthlyReport {
    /// Report for the calendar month containing `now`
    pub fn generate(transactions: &[Transaction], now: NaiveDate) -> Self {
        let (year, month) = (now.year(), now.month());

        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut spending_by_category: BTreeMap<String, Money> = BTreeMap::new();
        let mut transaction_count = 0;

        for txn in transactions.iter().filter(|t| t.in_month(year, month)) {
            transaction_count += 1;
            match txn.kind {
                TransactionType::Income => total_income += txn.amount,
                TransactionType::Expense => {
                    total_expense += txn.amount;
                    *spending_by_category
                        .entry(txn.category.clone())
                        .or_insert_with(Money::zero) += txn.amount;
                }
            }
        }

        Self {
            year,
            month,
            month_name: now.format("%B %Y").to_string(),
            total_income,
            total_expense,
            net_savings: total_income - total_expense,
            spending_by_category,
            transaction_count,
        }
    }

    /// Share of this month's expenses spent in `category`, as a percentage
    pub fn category_share(&self, category: &str) -> f64 {
        if self.total_expense.is_zero() {
            return 0.0;
        }
        self.spending_by_category
            .get(category)
            .map_or(0.0, |spent| spent.to_f64() / self.total_expense.to_f64() * 100.0)
    }

    /// Categories ordered by spending, largest first (ties by name)
    pub fn ranked_categories(&self) -> Vec<(&str, Money)> {
        let mut ranked: Vec<(&str, Money)> = self
            .spending_by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard for {}\n", self.month_name));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16}{:>16}\n",
            "Total Income",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16}{:>16}\n",
            "Total Expense",
            self.total_expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16}{:>16}\n\n",
            "Net Savings",
            self.net_savings.format_with_symbol(symbol)
        ));

        output.push_str("Spending by Category\n");
        output.push_str(&separator(60));
        output.push('\n');

        if self.spending_by_category.is_empty() {
            output.push_str("No expense data for this month.\n");
            return output;
        }

        let max = self
            .ranked_categories()
            .first()
            .map_or(0.0, |(_, amount)| amount.to_f64());

        for (name, amount) in self.ranked_categories() {
            output.push_str(&format!(
                "{:<14} {} {:>6} {:>12}\n",
                name,
                format_bar(amount.to_f64(), max, CHART_WIDTH),
                format_percentage(self.category_share(name)),
                amount.format_with_symbol(symbol)
            ));
        }

        output
    }
}

/// Parse a `YYYY-MM` month key into the first day of that month
pub fn parse_month_key(s: &str) -> LedgerResult<NaiveDate> {
    let invalid = || LedgerError::InvalidDate(s.to_string());

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: u32, kind: TransactionType, cents: i64, category: &str, on: NaiveDate) -> Transaction {
        Transaction::new(id, kind, Money::from_cents(cents), category, "", on)
    }

    #[test]
    fn test_current_month_only() {
        let now = date(2024, 6, 15);
        let transactions = vec![
            txn(1, TransactionType::Income, 100000, "Salary", date(2024, 6, 1)),
            txn(2, TransactionType::Expense, 30000, "Rent", date(2024, 6, 2)),
            txn(3, TransactionType::Expense, 5000, "Dining", date(2024, 5, 28)),
        ];

        let report = MonthlyReport::generate(&transactions, now);

        assert_eq!(report.total_income, Money::from_cents(100000));
        assert_eq!(report.total_expense, Money::from_cents(30000));
        assert_eq!(report.net_savings, Money::from_cents(70000));
        assert_eq!(report.spending_by_category.len(), 1);
        assert_eq!(report.spending_by_category["Rent"], Money::from_cents(30000));
        assert_eq!(report.month_name, "June 2024");
        assert_eq!(report.transaction_count, 2);
    }

    #[test]
    fn test_same_month_other_year_excluded() {
        let transactions = vec![txn(1, TransactionType::Expense, 100, "Rent", date(2023, 6, 2))];
        let report = MonthlyReport::generate(&transactions, date(2024, 6, 30));
        assert!(report.spending_by_category.is_empty());
        assert!(report.total_expense.is_zero());
    }

    #[test]
    fn test_negative_savings_and_category_sums() {
        let now = date(2024, 2, 10);
        let transactions = vec![
            txn(1, TransactionType::Income, 10000, "Gifts", date(2024, 2, 1)),
            txn(2, TransactionType::Expense, 7550, "Dining", date(2024, 2, 3)),
            txn(3, TransactionType::Expense, 4450, "Dining", date(2024, 2, 29)),
            txn(4, TransactionType::Expense, 3000, "Transport", date(2024, 2, 5)),
        ];

        let report = MonthlyReport::generate(&transactions, now);
        assert_eq!(report.net_savings, Money::from_cents(-5000));
        assert_eq!(report.spending_by_category["Dining"], Money::from_cents(12000));
        assert_eq!(report.ranked_categories()[0], ("Dining", Money::from_cents(12000)));
        assert!((report.category_share("Transport") - 20.0).abs() < 1e-9);
        assert_eq!(report.category_share("Rent"), 0.0);
    }

    #[test]
    fn test_empty_ledger() {
        let report = MonthlyReport::generate(&[], date(2024, 1, 1));
        assert!(report.net_savings.is_zero());
        assert_eq!(report.category_share("Rent"), 0.0);
        assert!(report.format_terminal("$").contains("No expense data"));
    }

    #[test]
    fn test_format_terminal() {
        let transactions = vec![
            txn(1, TransactionType::Income, 123450, "Salary", date(2024, 3, 1)),
            txn(2, TransactionType::Expense, 2000, "Dining", date(2024, 3, 4)),
        ];
        let text = MonthlyReport::generate(&transactions, date(2024, 3, 9)).format_terminal("€");

        assert!(text.starts_with("Dashboard for March 2024"));
        assert!(text.contains("€1234.50"));
        assert!(text.contains("€1214.50"));
        assert!(text.contains("Dining"));
    }

    #[test]
    fn test_parse_month_key() {
        assert_eq!(parse_month_key("2024-02").unwrap(), date(2024, 2, 1));
        assert!(parse_month_key("2024-13").is_err());
        assert!(parse_month_key("2024-2").is_err());
        assert!(parse_month_key("02-2024").is_err());
    }
}
