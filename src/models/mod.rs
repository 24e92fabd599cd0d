//! Core data models for the expense ledger
//!
//! This module contains the data structures that make up a ledger:
//! transactions, categories, budgets, currency and the ledger root itself.

pub mod budget;
pub mod category;
pub mod currency;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::{Category, TransactionKind};
pub use currency::Currency;
pub use ids::TransactionId;
pub use ledger::{Ledger, Settings};
pub use money::Money;
pub use period::YearMonth;
pub use transaction::{NewTransaction, Transaction};
