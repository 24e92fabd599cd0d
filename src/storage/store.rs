//! The ledger store
//!
//! Owns the in-memory ledger and its file. Every mutation is validated,
//! applied to a copy, saved, and only then made current, so a rejected or
//! failed mutation leaves both the ledger and the file as they were.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Budget, Category, Currency, Ledger, Money, NewTransaction, Transaction, TransactionKind,
};

use super::ledger_file::LedgerFile;

#[derive(Debug)]
pub struct LedgerStore {
    file: LedgerFile,
    ledger: Ledger,
}

impl LedgerStore {
    /// Open the ledger at `path`, loading it or starting from defaults
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        Self::load(LedgerFile::new(path.as_ref()))
    }

    /// Load a store from a ledger file
    pub fn load(file: LedgerFile) -> LedgerResult<Self> {
        let ledger = file.load()?;
        Ok(Self { file, ledger })
    }

    /// Discard an unreadable ledger file and start over
    ///
    /// The old file is moved aside rather than deleted. Callers must only use
    /// this after the user has confirmed.
    pub fn recover(file: LedgerFile) -> LedgerResult<(Self, Option<std::path::PathBuf>)> {
        let moved = file.quarantine()?;
        let ledger = Ledger::default();
        file.save(&ledger)?;
        warn!(path = %file.path().display(), "started a fresh ledger");
        Ok((Self { file, ledger }, moved))
    }

    pub fn file(&self) -> &LedgerFile {
        &self.file
    }

    /// The current ledger snapshot
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Write the current ledger to disk
    pub fn save(&self) -> LedgerResult<()> {
        self.file.save(&self.ledger)
    }

    // === Reads ===

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    /// The `limit` newest transactions
    pub fn recent_transactions(&self, limit: usize) -> &[Transaction] {
        let end = limit.min(self.ledger.transactions.len());
        &self.ledger.transactions[..end]
    }

    pub fn categories(&self, kind: TransactionKind) -> Vec<&Category> {
        self.ledger.categories_of(kind).collect()
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.ledger.budgets
    }

    pub fn currency(&self) -> Currency {
        self.ledger.currency()
    }

    /// Format an amount with the current currency symbol
    pub fn format_amount(&self, amount: Money) -> String {
        amount.format_with_symbol(self.currency().symbol())
    }

    // === Mutations ===

    /// Record a new transaction
    ///
    /// The category is matched case-insensitively and stored under its
    /// canonical name.
    pub fn add_transaction(&mut self, new: NewTransaction) -> LedgerResult<Transaction> {
        if !new.amount.is_positive() {
            debug!(amount = %new.amount, "rejected transaction amount");
            return Err(LedgerError::InvalidAmount(format!(
                "transaction amount must be greater than zero, got {}",
                new.amount
            )));
        }
        if new.amount.exceeds_max() {
            debug!(amount = %new.amount, "rejected transaction amount");
            return Err(LedgerError::InvalidAmount(format!(
                "transaction amount must be at most {}, got {}",
                Money::MAX,
                new.amount
            )));
        }

        let category = self
            .ledger
            .find_category(&new.category, new.kind)
            .map(|c| c.name.clone())
            .ok_or_else(|| {
                debug!(category = %new.category, kind = %new.kind, "rejected unknown category");
                LedgerError::UnknownCategory {
                    name: new.category.clone(),
                    kind: new.kind,
                }
            })?;

        let txn = new.into_transaction(category);
        let stored = txn.clone();
        self.commit(|ledger| ledger.insert_transaction(txn))?;

        info!(id = %stored.id, kind = %stored.kind, category = %stored.category, "added transaction");
        Ok(stored)
    }

    /// Add a category after normalizing its name
    pub fn add_category(&mut self, name: &str, kind: TransactionKind) -> LedgerResult<Category> {
        let category = Category::new(name, kind);
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if self.ledger.find_category(&category.name, kind).is_some() {
            debug!(name = %category.name, kind = %kind, "rejected duplicate category");
            return Err(LedgerError::DuplicateCategory {
                name: category.name,
                kind,
            });
        }

        let added = category.clone();
        self.commit(|ledger| ledger.categories.push(category))?;

        info!(name = %added.name, kind = %added.kind, "added category");
        Ok(added)
    }

    /// Set or replace the monthly limit for an expense category
    pub fn set_budget(&mut self, category: &str, limit: Money) -> LedgerResult<Budget> {
        let name = self
            .ledger
            .find_category(category, TransactionKind::Expense)
            .map(|c| c.name.clone())
            .ok_or_else(|| {
                LedgerError::InvalidCategory(format!(
                    "'{}' is not an expense category",
                    category.trim()
                ))
            })?;

        if !limit.is_positive() {
            return Err(LedgerError::InvalidAmount(format!(
                "budget limit must be greater than zero, got {}",
                limit
            )));
        }
        if limit.exceeds_max() {
            return Err(LedgerError::InvalidAmount(format!(
                "budget limit must be at most {}, got {}",
                Money::MAX,
                limit
            )));
        }

        let budget = Budget::new(name, limit);
        let stored = budget.clone();
        self.commit(|ledger| ledger.upsert_budget(budget))?;

        info!(category = %stored.category, limit = %stored.limit, "set budget");
        Ok(stored)
    }

    /// Change the display currency from a code such as "EUR"
    pub fn set_currency(&mut self, code: &str) -> LedgerResult<Currency> {
        let currency: Currency = code.parse()?;
        self.set_currency_to(currency)?;
        Ok(currency)
    }

    pub fn set_currency_to(&mut self, currency: Currency) -> LedgerResult<()> {
        self.commit(|ledger| ledger.settings.currency = currency)?;
        info!(currency = %currency, "set currency");
        Ok(())
    }

    /// Apply a change to a copy, persist it, then make it current
    fn commit(&mut self, change: impl FnOnce(&mut Ledger)) -> LedgerResult<()> {
        let mut next = self.ledger.clone();
        change(&mut next);
        self.file.save(&next)?;
        self.ledger = next;
        Ok(())
    }
}
