//! Category model
//!
//! Categories are a user-extensible set, split by transaction kind. The same
//! name may exist once as an income category and once as an expense category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Unknown transaction kind '{}' (expected income or expense)",
                other
            ))),
        }
    }
}

/// A named category for one transaction kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub kind: TransactionKind,
}

impl Category {
    /// Create a category, normalizing the name
    pub fn new(name: &str, kind: TransactionKind) -> Self {
        Self {
            name: normalize_name(name),
            kind,
        }
    }

    /// Compare names the way they are stored: whitespace-collapsed and
    /// case-insensitive
    pub fn matches(&self, name: &str, kind: TransactionKind) -> bool {
        self.kind == kind && name_key(&self.name) == name_key(name)
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(
                self.name.chars().count(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const MAX_NAME_LEN: usize = 50;

/// Trim a category name and title-case each word ("dining out" -> "Dining Out")
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lookup key for a category name; two names with the same key are the
/// same category
pub fn name_key(name: &str) -> String {
    normalize_name(name).to_lowercase()
}

/// The categories every new ledger starts with
pub fn default_categories() -> Vec<Category> {
    const EXPENSE: [&str; 6] = ["Groceries", "Rent", "Transport", "Dining", "Utilities", "Other"];
    const INCOME: [&str; 4] = ["Salary", "Bonus", "Gifts", "Other"];

    EXPENSE
        .iter()
        .map(|name| Category::new(name, TransactionKind::Expense))
        .chain(
            INCOME
                .iter()
                .map(|name| Category::new(name, TransactionKind::Income)),
        )
        .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  dining out "), "Dining Out");
        assert_eq!(normalize_name("GROCERIES"), "Groceries");
        assert_eq!(normalize_name("pet   care"), "Pet Care");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_matches_is_case_insensitive_and_kind_aware() {
        let cat = Category::new("groceries", TransactionKind::Expense);
        assert_eq!(cat.name, "Groceries");
        assert!(cat.matches("GROCERIES", TransactionKind::Expense));
        assert!(!cat.matches("Groceries", TransactionKind::Income));
        assert!(!cat.matches("Grocery", TransactionKind::Expense));
    }

    #[test]
    fn test_matches_collapses_whitespace() {
        let cat = Category::new("pet  care", TransactionKind::Expense);
        assert_eq!(cat.name, "Pet Care");
        assert!(cat.matches("pet  care", TransactionKind::Expense));
        assert!(cat.matches("  PET\tcare ", TransactionKind::Expense));
        assert_eq!(name_key(" Dining   OUT"), "dining out");
    }

    #[test]
    fn test_validation() {
        assert!(Category::new("Rent", TransactionKind::Expense).validate().is_ok());
        assert_eq!(
            Category::new("  ", TransactionKind::Expense).validate(),
            Err(CategoryValidationError::EmptyName)
        );
        assert!(matches!(
            Category::new(&"a".repeat(51), TransactionKind::Income).validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }

    #[test]
    fn test_default_categories() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 10);
        assert!(defaults
            .iter()
            .any(|c| c.matches("Other", TransactionKind::Expense)));
        assert!(defaults
            .iter()
            .any(|c| c.matches("Other", TransactionKind::Income)));
        assert!(defaults
            .iter()
            .any(|c| c.matches("Salary", TransactionKind::Income)));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_serialization() {
        let cat = Category::new("Rent", TransactionKind::Expense);
        let json = serde_json::to_string(&cat).unwrap();
        assert_eq!(json, r#"{"name":"Rent","kind":"expense"}"#);
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(cat, back);
    }
}
