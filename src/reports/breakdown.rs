//! Category breakdown
//!
//! Expense spend per category for one month, in the order a pie or bar chart
//! should draw it.

use std::collections::HashMap;

use crate::models::{Ledger, Money, YearMonth};

/// Spend for one expense category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Money,
    pub transaction_count: usize,
    /// Share of the month's total expense, 0-100
    pub percentage: f64,
}

/// Per-category expense totals for a month
///
/// Categories without spend are left out. Ordered by amount descending, ties
/// by category name ascending, so the same ledger always draws the same chart.
pub fn category_breakdown(ledger: &Ledger, month: YearMonth) -> Vec<CategorySpend> {
    let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();

    for txn in ledger
        .transactions
        .iter()
        .filter(|t| t.is_expense() && month.contains(t.date))
    {
        let entry = by_category
            .entry(txn.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let total: Money = by_category.values().map(|(amount, _)| *amount).sum();

    let mut rows: Vec<CategorySpend> = by_category
        .into_iter()
        .filter(|(_, (amount, _))| !amount.is_zero())
        .map(|(category, (amount, count))| CategorySpend {
            category: category.to_string(),
            amount,
            transaction_count: count,
            percentage: if total.is_zero() {
                0.0
            } else {
                amount.as_f64() / total.as_f64() * 100.0
            },
        })
        .collect();

    rows.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}
