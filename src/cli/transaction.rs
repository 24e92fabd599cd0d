//! Transaction CLI commands

use clap::Args;

use crate::display::format_transaction_register;
use crate::error::LedgerResult;
use crate::models::transaction::parse_date;
use crate::models::{NewTransaction, TransactionKind};
use crate::storage::LedgerStore;

use super::{parse_amount, parse_month};

/// Arguments for `ledger add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// income or expense
    pub kind: TransactionKind,
    /// Amount (e.g., "12.50")
    pub amount: String,
    /// Category name
    pub category: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Free-form note
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Arguments for `ledger list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

pub fn handle_add_command(store: &mut LedgerStore, args: AddArgs) -> LedgerResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match args.date.as_deref() {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut new = NewTransaction::new(args.kind, date, amount, args.category);
    if let Some(note) = args.note {
        new = new.with_note(note);
    }

    let txn = store.add_transaction(new)?;
    println!(
        "Added {} of {} to {} on {}",
        txn.kind,
        store.format_amount(txn.amount),
        txn.category,
        txn.date.format("%Y-%m-%d")
    );
    println!("  ID: {}", txn.id);
    Ok(())
}

pub fn handle_list_command(store: &LedgerStore, args: ListArgs) -> LedgerResult<()> {
    let transactions: Vec<_> = match args.month.as_deref() {
        Some(m) => {
            let month = parse_month(Some(m))?;
            store
                .transactions()
                .iter()
                .filter(|t| month.contains(t.date))
                .take(args.limit)
                .cloned()
                .collect()
        }
        None => store.recent_transactions(args.limit).to_vec(),
    };

    print!(
        "{}",
        format_transaction_register(&transactions, store.currency())
    );
    Ok(())
}
