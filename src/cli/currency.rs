//! Currency CLI commands

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::services::CurrencyService;
use crate::storage::Storage;

/// Currency subcommands
#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// Show the selected currency symbol
    Show,

    /// List the known currencies
    List,

    /// Select the display symbol (any text is accepted)
    Set {
        /// Symbol such as "€"
        symbol: String,
    },
}

/// Handle a currency command
pub fn handle_currency_command(storage: &mut Storage, cmd: CurrencyCommands) -> LedgerResult<()> {
    let mut service = CurrencyService::new(storage);

    match cmd {
        CurrencyCommands::Show => match service.current_name() {
            Some(name) => println!("{}", name),
            None => println!("{} (custom)", service.symbol()),
        },

        CurrencyCommands::List => {
            let current = service.symbol().to_string();
            for (name, symbol) in service.available() {
                let marker = if *symbol == current { "*" } else { " " };
                println!("{} {}", marker, name);
            }
        }

        CurrencyCommands::Set { symbol } => {
            service.select(&symbol);
            println!("Currency set to {}.", symbol);
        }
    }

    Ok(())
}
