//! Budget progress display formatting

use crate::models::Currency;
use crate::reports::BudgetProgress;

use super::report::{format_percentage, percent_bar, truncate};

/// Format budget progress bars for a month
pub fn format_budget_progress(progress: &[BudgetProgress], currency: Currency) -> String {
    if progress.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let symbol = currency.symbol();
    let mut output = String::new();
    output.push_str(&format!(
        "{:16} {:20} {:>12} {:>12} {:>12} {:>6}\n",
        "Category", "", "Spent", "Limit", "Remaining", "Used"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for row in progress {
        output.push_str(&format!(
            "{:16} {} {:>12} {:>12} {:>12} {:>6}\n",
            truncate(&row.category, 16),
            percent_bar(row.percent_used(), 20),
            row.spent.format_with_symbol(symbol),
            row.limit.format_with_symbol(symbol),
            row.remaining.format_with_symbol(symbol),
            format_percentage(row.percent_used())
        ));
    }

    output
}
