//! Transaction CLI commands
//!
//! `add` records an income or expense; `list` shows the ledger.

use clap::Args;

use crate::display::{added_message, format_transaction_table};
use crate::error::LedgerResult;
use crate::models::TransactionType;
use crate::services::{CurrencyService, TransactionFilter, TransactionService};
use crate::storage::Storage;

use super::today;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type: income or expense
    pub kind: TransactionType,

    /// Amount (e.g. "42.50"); the sign is ignored
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category name
    pub category: String,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show this type
    #[arg(short = 't', long = "type")]
    pub kind: Option<TransactionType>,

    /// Only show this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Number of transactions to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

pub fn handle_add_command(storage: &mut Storage, args: AddArgs) -> LedgerResult<()> {
    let date = args
        .date
        .unwrap_or_else(|| today().format("%Y-%m-%d").to_string());

    let txn = TransactionService::new(storage).add(
        args.kind,
        &args.amount,
        &args.category,
        &args.description,
        &date,
    )?;

    let amount = CurrencyService::new(storage).format(txn.amount);
    println!("{}", added_message(&txn));
    println!("  {} {} in {}", txn.kind, amount, txn.category);
    Ok(())
}

pub fn handle_list_command(storage: &mut Storage, args: ListArgs) -> LedgerResult<()> {
    let mut filter = TransactionFilter::new();
    filter.kind = args.kind;
    filter.category = args.category;
    filter.limit = args.limit;

    let symbol = CurrencyService::new(storage).symbol().to_string();
    let transactions = TransactionService::new(storage).list_filtered(&filter);

    print!("{}", format_transaction_table(&transactions, &symbol));
    Ok(())
}
