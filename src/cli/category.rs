//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::models::TransactionType;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories (both types unless one is given)
    List {
        /// income or expense
        kind: Option<TransactionType>,
    },

    /// Add a category
    Add {
        /// Category name (trimmed and title-cased)
        name: String,
        /// income or expense
        kind: TransactionType,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &mut Storage, cmd: CategoryCommands) -> LedgerResult<()> {
    let mut service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let kinds = match kind {
                Some(kind) => vec![kind],
                None => TransactionType::ALL.to_vec(),
            };
            let sections: Vec<String> = kinds
                .into_iter()
                .map(|k| format_category_list(k, service.list(k)))
                .collect();
            print!("{}", sections.join("\n"));
        }

        CategoryCommands::Add { name, kind } => {
            let name = service.add(&name, kind)?;
            println!("Category '{}' added.", name);
        }
    }

    Ok(())
}
