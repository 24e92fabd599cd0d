//! Display formatting for terminal output
//!
//! Plain-text renderings of transactions, categories, budgets and reports.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

pub use budget::format_budget_progress;
pub use category::format_category_list;
pub use transaction::format_transaction_register;
