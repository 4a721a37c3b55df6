//! Budget Status
//!
//! Compares each budget ceiling with the month's spending in that category.
//! Budgets are advisory; going over only changes how a row is shown.

use crate::models::{BudgetTable, Money};

use super::monthly::MonthlyReport;

/// One budget compared with actual spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// `limit - spent`; negative when over budget
    pub remaining: Money,
}

impl BudgetStatus {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Percent of the ceiling used; a zero ceiling with spending reads as 100%+
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            return if self.spent.is_zero() { 0.0 } else { 100.0 };
        }
        self.spent.to_f64() / self.limit.to_f64() * 100.0
    }
}

/// Status rows for every budget, ordered by category name
pub fn budget_status(budgets: &BudgetTable, report: &MonthlyReport) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|(category, limit)| {
            let spent = report
                .spending_by_category
                .get(category)
                .copied()
                .unwrap_or_default();
            BudgetStatus {
                category: category.clone(),
                limit: *limit,
                spent,
                remaining: *limit - spent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_budget_status() {
        let day = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let transactions = vec![
            Transaction::new(1, TransactionType::Expense, Money::from_cents(60000), "Rent", "", day),
            Transaction::new(2, TransactionType::Expense, Money::from_cents(2500), "Dining", "", day),
        ];
        let report = MonthlyReport::generate(&transactions, day);

        let mut budgets = BudgetTable::new();
        budgets.set("Rent", Money::from_cents(50000));
        budgets.set("Dining", Money::from_cents(10000));
        budgets.set("Utilities", Money::zero());

        let rows = budget_status(&budgets, &report);
        assert_eq!(
            rows.iter().map(|r| r.category.as_str()).collect::<Vec<_>>(),
            vec!["Dining", "Rent", "Utilities"]
        );

        let dining = &rows[0];
        assert_eq!(dining.remaining, Money::from_cents(7500));
        assert!(!dining.is_over_budget());
        assert!((dining.percent_used() - 25.0).abs() < 1e-9);

        let rent = &rows[1];
        assert!(rent.is_over_budget());
        assert_eq!(rent.remaining, Money::from_cents(-10000));

        assert_eq!(rows[2].percent_used(), 0.0);
    }
}
