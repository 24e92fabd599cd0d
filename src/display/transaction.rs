//! Transaction display formatting

use crate::models::{Currency, Transaction};

use super::report::truncate;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, currency: Currency) -> String {
    format!(
        "{} {:7} {:16} {:>12}  {}",
        txn.date.format("%Y-%m-%d"),
        txn.kind.to_string(),
        truncate(&txn.category, 16),
        txn.amount.format_with_symbol(currency.symbol()),
        txn.note.as_deref().map(|n| truncate(n, 30)).unwrap_or_default()
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], currency: Currency) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:16} {:>12}  {}\n",
        "Date", "Type", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for txn in transactions {
        output.push_str(format_transaction_row(txn, currency).trim_end());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction};
    use chrono::NaiveDate;

    fn txn(note: &str) -> Transaction {
        NewTransaction::expense(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            Money::from_cents(35000),
            "Groceries",
        )
        .with_note(note)
        .into_transaction("Groceries".into())
    }

    #[test]
    fn test_row() {
        let row = format_transaction_row(&txn("weekly shop"), Currency::Gbp);
        assert!(row.starts_with("2024-05-10 expense Groceries"));
        assert!(row.contains("£350.00"));
        assert!(row.ends_with("weekly shop"));
    }

    #[test]
    fn test_register() {
        assert_eq!(
            format_transaction_register(&[], Currency::Usd),
            "No transactions found.\n"
        );

        let output = format_transaction_register(&[txn(""), txn("x")], Currency::Usd);
        assert_eq!(output.lines().count(), 4);
        assert!(output.starts_with("Date"));
    }
}
