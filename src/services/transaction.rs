//! Transaction service
//!
//! Validates user-entered transaction fields, assigns ids, keeps the ledger
//! sorted newest-first and persists after every insertion. Transactions are
//! never edited or deleted.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Money, Transaction, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    /// Exact category name
    pub category: Option<String>,
    /// Calendar month as (year, month)
    pub month: Option<(i32, u32)>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn month(mut self, year: i32, month: u32) -> Self {
        self.month = Some((year, month));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.as_deref().map_or(true, |c| txn.category == c)
            && self.month.map_or(true, |(y, m)| txn.in_month(y, m))
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction from user-entered text
    ///
    /// The amount's sign is ignored. `date` must be `YYYY-MM-DD`. The
    /// category is stored as given; membership in the registry is not
    /// checked here.
    pub fn add(
        &mut self,
        kind: TransactionType,
        amount: &str,
        category: &str,
        description: &str,
        date: &str,
    ) -> LedgerResult<Transaction> {
        let amount = Money::parse(amount)?.abs();
        let date = parse_date(date)?;

        let transactions = &mut self.storage.state_mut().transactions;

        // Length-based ids only stay unique because nothing is ever deleted
        let id = u32::try_from(transactions.len() + 1).map_err(|_| {
            LedgerError::OperationFailed(format!(
                "transaction id space exhausted at {} records",
                transactions.len()
            ))
        })?;

        let txn = Transaction::new(id, kind, amount, category, description, date);
        transactions.push(txn.clone());
        // Stable sort: same-day entries keep insertion order
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        self.storage.persist();
        debug!(id, kind = %kind, amount = %txn.amount, "Added transaction");

        Ok(txn)
    }

    /// All transactions, newest first
    pub fn list(&self) -> &[Transaction] {
        &self.storage.state().transactions
    }

    /// Transactions matching a filter, newest first
    pub fn list_filtered(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let matching = self
            .list()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned();

        match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.list().len()
    }
}
