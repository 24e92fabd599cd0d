//! Storage layer for the expense ledger
//!
//! Provides the single-file JSON repository with atomic writes and the
//! store that validates and persists every mutation.

pub mod file_io;
pub mod ledger_file;
pub mod store;

pub use file_io::write_json_atomic;
pub use ledger_file::LedgerFile;
pub use store::LedgerStore;
