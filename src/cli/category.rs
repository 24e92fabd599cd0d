//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::models::TransactionKind;
use crate::storage::LedgerStore;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List income and expense categories
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: TransactionKind,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &mut LedgerStore, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            let ledger = store.ledger();
            print!("{}", format_category_list(&ledger.categories, &ledger.budgets));
        }

        CategoryCommands::Add { name, kind } => {
            let category = store.add_category(&name, kind)?;
            println!("Added {} category: {}", category.kind, category.name);
        }
    }

    Ok(())
}
