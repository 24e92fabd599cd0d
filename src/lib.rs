//! expense-ledger - personal income and expense tracking
//!
//! This library provides the core of a single-user expense tracker: a ledger
//! of income and expense transactions, user-defined categories, monthly
//! budgets and a display currency, persisted to one JSON file, plus the
//! monthly aggregates a dashboard is drawn from.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Ledger file location
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, etc.)
//! - `storage`: JSON file storage and the validating ledger store
//! - `reports`: Pure aggregates (monthly totals, category breakdown, budget progress)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use expense_ledger::models::{Money, NewTransaction, YearMonth};
//! use expense_ledger::reports::budget_progress;
//! use expense_ledger::storage::LedgerStore;
//!
//! # fn main() -> expense_ledger::LedgerResult<()> {
//! let mut store = LedgerStore::open("expense_data.json")?;
//! store.set_budget("Groceries", Money::from_cents(50000))?;
//! store.add_transaction(NewTransaction::expense(
//!     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
//!     Money::from_cents(35000),
//!     "Groceries",
//! ))?;
//!
//! let progress = budget_progress(store.ledger(), YearMonth::new(2024, 5)?);
//! assert_eq!(progress[0].remaining, Money::from_cents(15000));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
