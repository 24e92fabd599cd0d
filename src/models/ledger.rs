//! The ledger aggregate root
//!
//! Holds everything one user tracks: transactions, categories, budgets and
//! settings. `Ledger::validate` is the single place the cross-entity
//! invariants are checked; the store calls it on every load.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::budget::Budget;
use super::category::{default_categories, name_key, Category, TransactionKind};
use super::money::Money;
use super::currency::Currency;
use super::transaction::Transaction;

/// Current on-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// User preferences stored alongside the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub settings: Settings,

    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// Sorted by category name
    #[serde(default)]
    pub budgets: Vec<Budget>,

    /// Newest date first; equal dates keep insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            settings: Settings::default(),
            categories: default_categories(),
            budgets: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

impl Ledger {
    /// Find a category by name (case-insensitive) for one kind
    pub fn find_category(&self, name: &str, kind: TransactionKind) -> Option<&Category> {
        self.categories.iter().find(|c| c.matches(name, kind))
    }

    /// Categories of one kind, in creation order
    pub fn categories_of(&self, kind: TransactionKind) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |c| c.kind == kind)
    }

    pub fn find_budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.is_for(category))
    }

    pub fn currency(&self) -> Currency {
        self.settings.currency
    }

    /// Insert a transaction keeping newest-first order
    pub(crate) fn insert_transaction(&mut self, txn: Transaction) {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.date < txn.date)
            .unwrap_or(self.transactions.len());
        self.transactions.insert(pos, txn);
    }

    /// Insert or replace the budget for a category, keeping name order
    pub(crate) fn upsert_budget(&mut self, budget: Budget) {
        self.budgets.retain(|b| !b.is_for(&budget.category));
        self.budgets.push(budget);
        self.budgets.sort_by(|a, b| a.category.cmp(&b.category));
    }

    /// Check every structural invariant, returning the first violation
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(format!(
                "unsupported schema version {} (expected {})",
                self.schema_version, SCHEMA_VERSION
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            category
                .validate()
                .map_err(|e| format!("category '{}': {}", category.name, e))?;
            if !seen.insert((name_key(&category.name), category.kind)) {
                return Err(format!(
                    "duplicate {} category '{}'",
                    category.kind, category.name
                ));
            }
        }

        let mut budgeted = HashSet::new();
        for budget in &self.budgets {
            if self
                .find_category(&budget.category, TransactionKind::Expense)
                .is_none()
            {
                return Err(format!(
                    "budget for '{}' does not reference an expense category",
                    budget.category
                ));
            }
            if !budget.limit.is_positive() {
                return Err(format!(
                    "budget for '{}' has non-positive limit {}",
                    budget.category, budget.limit
                ));
            }
            if budget.limit.exceeds_max() {
                return Err(format!(
                    "budget for '{}' exceeds the maximum of {}",
                    budget.category,
                    Money::MAX
                ));
            }
            if !budgeted.insert(name_key(&budget.category)) {
                return Err(format!("more than one budget for '{}'", budget.category));
            }
        }

        let mut ids = HashSet::new();
        for txn in &self.transactions {
            if !ids.insert(txn.id) {
                return Err(format!("duplicate transaction id {}", txn.id.as_uuid()));
            }
            if !txn.amount.is_positive() {
                return Err(format!(
                    "transaction {} has non-positive amount {}",
                    txn.id, txn.amount
                ));
            }
            if txn.amount.exceeds_max() {
                return Err(format!(
                    "transaction {} exceeds the maximum amount of {}",
                    txn.id,
                    Money::MAX
                ));
            }
            if self.find_category(&txn.category, txn.kind).is_none() {
                return Err(format!(
                    "transaction {} references unknown {} category '{}'",
                    txn.id, txn.kind, txn.category
                ));
            }
        }

        Ok(())
    }

    /// Bring a validated, possibly hand-edited ledger back to stored form
    ///
    /// Transaction and budget categories are rewritten to the canonical
    /// category name, then both lists are re-sorted.
    pub(crate) fn normalize(&mut self) {
        let canonical = |name: &str, kind: TransactionKind, categories: &[Category]| {
            categories
                .iter()
                .find(|c| c.matches(name, kind))
                .map(|c| c.name.clone())
        };

        for txn in &mut self.transactions {
            if let Some(name) = canonical(&txn.category, txn.kind, &self.categories) {
                txn.category = name;
            }
        }
        for budget in &mut self.budgets {
            let name = canonical(&budget.category, TransactionKind::Expense, &self.categories);
            if let Some(name) = name {
                budget.category = name;
            }
        }

        self.transactions.sort_by(|a, b| b.date.cmp(&a.date));
        self.budgets.sort_by(|a, b| a.category.cmp(&b.category));
    }
}
