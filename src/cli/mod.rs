//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod budget;
pub mod category;
pub mod currency;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use report::handle_report_command;
pub use transaction::{handle_add_command, handle_list_command, AddArgs, ListArgs};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, YearMonth};

/// Parse a user-entered amount
pub(crate) fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| LedgerError::InvalidAmount(e.to_string()))
}

/// Parse an optional `YYYY-MM` argument, defaulting to the current month
pub(crate) fn parse_month(month: Option<&str>) -> LedgerResult<YearMonth> {
    match month {
        Some(s) => YearMonth::parse(s),
        None => Ok(YearMonth::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert!(matches!(
            parse_amount("twelve"),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month(Some("2024-05")).unwrap(),
            YearMonth::new(2024, 5).unwrap()
        );
        assert_eq!(parse_month(None).unwrap(), YearMonth::current());
        assert!(parse_month(Some("nope")).is_err());
    }
}
