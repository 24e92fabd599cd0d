//! Configuration module for the expense ledger
//!
//! The only configurable thing is where the ledger file lives.

pub mod paths;

pub use paths::LedgerPaths;
