//! Monthly totals
//!
//! Income, expense and net for one calendar month.

use crate::models::{Ledger, Money, TransactionKind, YearMonth};

/// Totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: YearMonth,
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; negative when the month ran a deficit
    pub net: Money,
}

impl MonthlyTotals {
    pub fn is_deficit(&self) -> bool {
        self.net.is_negative()
    }
}

/// Sum income and expense for a month
///
/// A month without transactions yields all zeros.
pub fn monthly_totals(ledger: &Ledger, month: YearMonth) -> MonthlyTotals {
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for txn in ledger.transactions.iter().filter(|t| month.contains(t.date)) {
        match txn.kind {
            TransactionKind::Income => total_income += txn.amount,
            TransactionKind::Expense => total_expense += txn.amount,
        }
    }

    MonthlyTotals {
        month,
        total_income,
        total_expense,
        net: total_income - total_expense,
    }
}
