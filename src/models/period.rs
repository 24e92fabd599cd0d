//! Calendar month used to scope aggregates
//!
//! All reports are monthly, matching how budgets are defined.

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A calendar month, e.g. "2024-05"
///
/// Stored as the first day of the month so every value is a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Create a month, rejecting months outside 1-12 or years chrono can't represent
    pub fn new(year: i32, month: u32) -> Result<Self, LedgerError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| LedgerError::InvalidMonth(format!("{:04}-{:02}", year, month)))
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        // Day 1 exists for every representable date's month.
        Self(date - chrono::Duration::days(i64::from(date.day0())))
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        self.next().0.pred_opt().unwrap_or(self.0)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Self {
        self.0
            .checked_add_months(Months::new(1))
            .map(Self)
            .unwrap_or(*self)
    }

    pub fn prev(&self) -> Self {
        self.0
            .checked_sub_months(Months::new(1))
            .map(Self)
            .unwrap_or(*self)
    }

    /// Long display name, e.g. "May 2024"
    pub fn long_name(&self) -> String {
        self.0.format("%B %Y").to_string()
    }

    /// Parse a month string in `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let trimmed = s.trim();
        let invalid = || LedgerError::InvalidMonth(format!("'{}' (expected YYYY-MM)", trimmed));

        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds() {
        let jan = YearMonth::new(2025, 1).unwrap();
        assert_eq!(jan.first_day(), date(2025, 1, 1));
        assert_eq!(jan.last_day(), date(2025, 1, 31));

        let feb_leap = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb_leap.last_day(), date(2024, 2, 29));
    }

    #[test]
    fn test_navigation() {
        let dec = YearMonth::new(2024, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(YearMonth::new(2025, 1).unwrap().prev(), dec);
    }

    #[test]
    fn test_contains() {
        let may = YearMonth::new(2024, 5).unwrap();
        assert!(may.contains(date(2024, 5, 1)));
        assert!(may.contains(date(2024, 5, 31)));
        assert!(!may.contains(date(2024, 6, 1)));
        assert!(!may.contains(date(2023, 5, 10)));
    }

    #[test]
    fn test_of_date() {
        assert_eq!(YearMonth::of(date(2024, 5, 17)), YearMonth::new(2024, 5).unwrap());
    }

    #[test]
    fn test_parse() {
        assert_eq!(YearMonth::parse("2024-05").unwrap(), YearMonth::new(2024, 5).unwrap());
        assert_eq!(YearMonth::parse("2024-5").unwrap(), YearMonth::new(2024, 5).unwrap());
        assert!(YearMonth::parse("2024-13").is_err());
        assert!(YearMonth::parse("2024-00").is_err());
        assert!(YearMonth::parse("May 2024").is_err());
        assert!(YearMonth::parse("2024-05-01").is_err());
    }

    #[test]
    fn test_display() {
        let may = YearMonth::new(2024, 5).unwrap();
        assert_eq!(may.to_string(), "2024-05");
        assert_eq!(may.long_name(), "May 2024");
    }
}
