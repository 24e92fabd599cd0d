//! Ledger repository for JSON storage
//!
//! Reads and writes the whole ledger as a single JSON document. There are no
//! partial writes: every save replaces the file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;

use super::file_io::{read_optional, write_json_atomic};

/// The persisted ledger file
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the ledger
    ///
    /// A missing file yields the default ledger. A file that isn't UTF-8,
    /// doesn't parse, or parses but breaks a ledger invariant is reported as
    /// corrupt and left untouched on disk.
    pub fn load(&self) -> LedgerResult<Ledger> {
        let Some(contents) = read_optional(&self.path)? else {
            info!(path = %self.path.display(), "no ledger file, starting with defaults");
            return Ok(Ledger::default());
        };

        let mut ledger: Ledger = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::corrupt(&self.path, e.to_string()))?;

        ledger
            .validate()
            .map_err(|reason| LedgerError::corrupt(&self.path, reason))?;
        ledger.normalize();

        info!(
            path = %self.path.display(),
            transactions = ledger.transactions.len(),
            categories = ledger.categories.len(),
            budgets = ledger.budgets.len(),
            "loaded ledger"
        );
        Ok(ledger)
    }

    /// Replace the file with the given ledger
    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        write_json_atomic(&self.path, ledger)?;
        debug!(
            path = %self.path.display(),
            transactions = ledger.transactions.len(),
            "saved ledger"
        );
        Ok(())
    }

    /// Move an unreadable file aside so a fresh ledger can take its place
    ///
    /// Returns where the old file went, or `None` if there was nothing to move.
    pub fn quarantine(&self) -> LedgerResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ledger".to_string());
        let target = self.path.with_file_name(format!(
            "{}.corrupt-{}.json",
            stem,
            Utc::now().format("%Y%m%d-%H%M%S%3f")
        ));

        fs::rename(&self.path, &target).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to move {} aside: {}",
                self.path.display(),
                e
            ))
        })?;

        warn!(
            from = %self.path.display(),
            to = %target.display(),
            "moved corrupt ledger file aside"
        );
        Ok(Some(target))
    }
}
