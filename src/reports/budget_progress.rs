//! Budget progress
//!
//! How much of each monthly budget has been spent.

use crate::models::{Ledger, Money, YearMonth};

/// Consumption of one budget in one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetProgress {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// `limit - spent`; negative when over budget, never clamped
    pub remaining: Money,
}

impl BudgetProgress {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Percent of the limit spent; can exceed 100
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        self.spent.as_f64() / self.limit.as_f64() * 100.0
    }
}

/// Progress for every budget, in budget order
pub fn budget_progress(ledger: &Ledger, month: YearMonth) -> Vec<BudgetProgress> {
    ledger
        .budgets
        .iter()
        .map(|budget| {
            let spent: Money = ledger
                .transactions
                .iter()
                .filter(|t| {
                    t.is_expense() && month.contains(t.date) && budget.is_for(&t.category)
                })
                .map(|t| t.amount)
                .sum();

            BudgetProgress {
                category: budget.category.clone(),
                limit: budget.limit,
                spent,
                remaining: budget.limit - spent,
            }
        })
        .collect()
}
