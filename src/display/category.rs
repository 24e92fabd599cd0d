//! Category display formatting

use crate::models::{Budget, Category, TransactionKind};

/// Format categories grouped by kind, marking the ones with a budget
pub fn format_category_list(categories: &[Category], budgets: &[Budget]) -> String {
    let mut output = String::new();

    for (i, kind) in [TransactionKind::Expense, TransactionKind::Income]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            output.push('\n');
        }
        let heading = match kind {
            TransactionKind::Expense => "Expense categories",
            TransactionKind::Income => "Income categories",
        };
        output.push_str(heading);
        output.push('\n');

        let in_kind: Vec<&Category> = categories.iter().filter(|c| c.kind == kind).collect();
        if in_kind.is_empty() {
            output.push_str("  (none)\n");
            continue;
        }

        for (j, category) in in_kind.iter().enumerate() {
            let prefix = if j == in_kind.len() - 1 { "└── " } else { "├── " };
            let budget = budgets
                .iter()
                .find(|b| kind == TransactionKind::Expense && b.is_for(&category.name))
                .map(|b| format!(" (budget: {})", b.limit))
                .unwrap_or_default();
            output.push_str(&format!("  {}{}{}\n", prefix, category.name, budget));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_category_list() {
        let categories = vec![
            Category::new("Rent", TransactionKind::Expense),
            Category::new("Dining", TransactionKind::Expense),
        ];
        let budgets = vec![Budget::new("Rent", Money::from_cents(120000))];

        let output = format_category_list(&categories, &budgets);
        assert!(output.contains("├── Rent (budget: 1200.00)"));
        assert!(output.contains("└── Dining\n"));
        assert!(output.contains("Income categories\n  (none)"));
    }
}
