//! Currency CLI commands

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::models::Currency;
use crate::storage::LedgerStore;

/// Currency subcommands
#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// Show the current currency
    Show,

    /// List supported currencies
    List,

    /// Change the display currency
    Set {
        /// Currency code (USD, EUR, GBP, INR, JPY)
        code: String,
    },
}

/// Handle a currency command
pub fn handle_currency_command(store: &mut LedgerStore, cmd: CurrencyCommands) -> LedgerResult<()> {
    match cmd {
        CurrencyCommands::Show => {
            println!("{}", store.currency().label());
        }

        CurrencyCommands::List => {
            let current = store.currency();
            for currency in Currency::all() {
                let marker = if *currency == current { "*" } else { " " };
                println!("{} {}", marker, currency.label());
            }
        }

        CurrencyCommands::Set { code } => {
            let currency = store.set_currency(&code)?;
            println!("Currency set to {}", currency.label());
        }
    }

    Ok(())
}
