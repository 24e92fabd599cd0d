//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (the `--file` flag)
//! 2. `EXPENSE_LEDGER_FILE` environment variable (if set and non-empty)
//! 3. `expense_data.json` beside the running executable
//! 4. `expense_data.json` in the current directory, if the executable's
//!    location can't be determined

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

/// Environment variable overriding the ledger file location
pub const LEDGER_FILE_ENV: &str = "EXPENSE_LEDGER_FILE";

/// File name used when no location is configured
pub const DEFAULT_FILE_NAME: &str = "expense_data.json";

/// Where the ledger lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPaths {
    ledger_file: PathBuf,
}

impl LedgerPaths {
    /// Resolve the ledger file location
    ///
    /// Fails if the chosen path names an existing directory.
    pub fn resolve(explicit: Option<PathBuf>) -> LedgerResult<Self> {
        let env_override = std::env::var_os(LEDGER_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let ledger_file = explicit
            .or(env_override)
            .unwrap_or_else(default_ledger_file);

        if ledger_file.is_dir() {
            return Err(LedgerError::Config(format!(
                "{} is a directory, not a ledger file",
                ledger_file.display()
            )));
        }

        Ok(Self { ledger_file })
    }

    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }
}

fn default_ledger_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(DEFAULT_FILE_NAME)
}
