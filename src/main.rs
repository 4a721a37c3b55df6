use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::cli::{
    handle_add_command, handle_budget_command, handle_category_command, handle_currency_command,
    handle_dashboard_command, handle_list_command, handle_report_command, AddArgs, BudgetCommands,
    CategoryCommands, CurrencyCommands, ListArgs, ReportArgs,
};
use pocket_ledger::config::LedgerPaths;
use pocket_ledger::logging::init_tracing;
use pocket_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal finance tracker",
    long_about = "Pocket Ledger records income and expenses, tracks per-category \
                  budgets and shows a monthly dashboard, all stored in a single \
                  local JSON file."
)]
struct Cli {
    /// Use this ledger file instead of the default location
    #[arg(long, global = true, env = "POCKET_LEDGER_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense
    Add(AddArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Display currency commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Monthly income, expense and category breakdown
    Report(ReportArgs),

    /// This month's report together with budget status
    Dashboard,

    /// Show where the ledger file lives
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data_file = match cli.data_file {
        Some(path) => path,
        None => {
            let paths = LedgerPaths::new()?;
            paths.ensure_directories()?;
            paths.ledger_file()
        }
    };

    let mut storage = Storage::open_file(&data_file);

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut storage, args)?,
        Some(Commands::List(args)) => handle_list_command(&mut storage, args)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut storage, cmd)?,
        Some(Commands::Currency(cmd)) => handle_currency_command(&mut storage, cmd)?,
        Some(Commands::Report(args)) => handle_report_command(&mut storage, args)?,
        Some(Commands::Dashboard) | None => handle_dashboard_command(&mut storage)?,
        Some(Commands::Config) => {
            println!("Pocket Ledger Configuration");
            println!("===========================");
            println!("Ledger file: {}", data_file.display());
            println!("Currency:    {}", storage.state().currency_symbol);
            println!("Transactions: {}", storage.state().transactions.len());
        }
    }

    Ok(())
}
