//! Aggregates over a ledger snapshot
//!
//! Every function here is pure: the same ledger and month always produce the
//! same result, and nothing is written.

pub mod breakdown;
pub mod budget_progress;
pub mod monthly;
pub mod totals;

pub use breakdown::{category_breakdown, CategorySpend};
pub use budget_progress::{budget_progress, BudgetProgress};
pub use monthly::MonthlyReport;
pub use totals::{monthly_totals, MonthlyTotals};
