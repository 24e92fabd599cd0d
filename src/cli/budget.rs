//! Budget CLI commands

use clap::Subcommand;

use crate::display::format_budget_progress;
use crate::error::LedgerResult;
use crate::reports::budget_progress;
use crate::storage::LedgerStore;

use super::{parse_amount, parse_month};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show spending against each budget
    List {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set or replace the monthly limit for an expense category
    Set {
        /// Expense category name
        category: String,
        /// Monthly limit (e.g., "500" or "500.00")
        limit: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(store: &mut LedgerStore, cmd: BudgetCommands) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::List { month } => {
            let month = parse_month(month.as_deref())?;
            let progress = budget_progress(store.ledger(), month);
            println!("Budgets for {}", month.long_name());
            print!("{}", format_budget_progress(&progress, store.currency()));
        }

        BudgetCommands::Set { category, limit } => {
            let limit = parse_amount(&limit)?;
            let budget = store.set_budget(&category, limit)?;
            println!(
                "Budget for {} set to {}",
                budget.category,
                store.format_amount(budget.limit)
            );
        }
    }

    Ok(())
}
