//! Transaction model
//!
//! A transaction is a single income or expense entry. Amounts are always
//! positive; the kind carries the direction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::TransactionKind;
use super::ids::TransactionId;
use super::money::Money;

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    pub date: NaiveDate,

    /// Always positive
    pub amount: Money,

    pub kind: TransactionKind,

    /// Name of a category of the same kind
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign of its direction (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}

/// Input for a transaction that has not been stored yet
///
/// The store assigns the ID and resolves the category to its canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    pub note: Option<String>,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            kind,
            category: category.into(),
            note: None,
        }
    }

    pub fn expense(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Expense, date, amount, category)
    }

    pub fn income(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Income, date, amount, category)
    }

    /// Attach a note; blank notes are dropped
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        let trimmed = note.trim();
        self.note = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Turn into a stored transaction with a fresh ID
    pub(crate) fn into_transaction(self, category: String) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            category,
            note: self.note,
        }
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> Result<NaiveDate, crate::error::LedgerError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        crate::error::LedgerError::InvalidDate(format!("'{}' (expected YYYY-MM-DD): {}", s, e))
    })
}
