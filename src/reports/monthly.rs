//! Monthly report
//!
//! Everything the dashboard shows for one month in a single value: totals,
//! the category breakdown and budget progress.

use crate::display::report::{format_percentage, percent_bar, section};
use crate::models::{Currency, Ledger, Transaction, YearMonth};

use super::breakdown::{category_breakdown, CategorySpend};
use super::budget_progress::{budget_progress, BudgetProgress};
use super::totals::{monthly_totals, MonthlyTotals};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// e.g. "May 2024"
    pub month_name: String,
    pub currency: Currency,
    pub totals: MonthlyTotals,
    pub breakdown: Vec<CategorySpend>,
    pub budgets: Vec<BudgetProgress>,
    /// The month's transactions, newest first
    pub transactions: Vec<Transaction>,
}

impl MonthlyReport {
    pub fn generate(ledger: &Ledger, month: YearMonth) -> Self {
        Self {
            month_name: month.long_name(),
            currency: ledger.currency(),
            totals: monthly_totals(ledger, month),
            breakdown: category_breakdown(ledger, month),
            budgets: budget_progress(ledger, month),
            transactions: ledger
                .transactions
                .iter()
                .filter(|t| month.contains(t.date))
                .cloned()
                .collect(),
        }
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetProgress> {
        self.budgets.iter().filter(|b| b.is_over_budget())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let symbol = self.currency.symbol();
        let mut output = String::new();

        output.push_str(&format!("Monthly Report: {}\n", self.month_name));
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total Income:",
            self.totals.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total Expense:",
            self.totals.total_expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Net Savings:",
            self.totals.net.format_with_symbol(symbol)
        ));

        output.push_str(&section("Spending by Category", WIDTH));
        if self.breakdown.is_empty() {
            output.push_str("  No expenses this month.\n");
        }
        for row in &self.breakdown {
            output.push_str(&format!(
                "  {:<16} {:>12} {} {:>5}\n",
                row.category,
                row.amount.format_with_symbol(symbol),
                percent_bar(row.percentage, BAR_WIDTH),
                format_percentage(row.percentage)
            ));
        }

        output.push_str(&section("Budgets", WIDTH));
        if self.budgets.is_empty() {
            output.push_str("  No budgets set.\n");
        }
        for budget in &self.budgets {
            let flag = if budget.is_over_budget() { "  OVER" } else { "" };
            output.push_str(&format!(
                "  {:<16} {} {} / {} ({} left){}\n",
                budget.category,
                percent_bar(budget.percent_used(), BAR_WIDTH),
                budget.spent.format_with_symbol(symbol),
                budget.limit.format_with_symbol(symbol),
                budget.remaining.format_with_symbol(symbol),
                flag
            ));
        }

        output
    }
}
