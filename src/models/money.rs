//! Fixed-point amounts
//!
//! Every amount in the ledger is a whole number of hundredths of the display
//! currency. Sums and differences are exact; floats only appear when a ratio
//! is needed for a percentage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Symbols stripped from the front of an amount before parsing
const CURRENCY_SYMBOLS: [char; 5] = ['$', '€', '£', '₹', '¥'];

/// An amount in hundredths of a currency unit
///
/// The ledger itself only stores positive amounts, but derived values such as
/// net savings or remaining budget are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction or budget may hold (one billion
    /// units). Keeps any realistic month's sums far inside `i64`.
    pub const MAX: Money = Money(100_000_000_000);

    /// Wrap a number of cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Build an amount from whole units plus cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_major_minor(10, 50);
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Cents past the whole units, always 0-99
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Whether the amount is beyond [`Money::MAX`] in either direction
    pub const fn exceeds_max(&self) -> bool {
        self.0 > Self::MAX.0 || self.0 < -Self::MAX.0
    }

    /// Parse user input such as "10.50", "-10.50", "$10.50", "€10", "1,250.00", ".5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.trim_start_matches(|c: char| CURRENCY_SYMBOLS.contains(&c));
        let s: String = s.chars().filter(|c| *c != ',').collect();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let cents = match s.split_once('.') {
            Some((whole, fraction)) => {
                if !whole.chars().all(|c| c.is_ascii_digit())
                    || !fraction.chars().all(|c| c.is_ascii_digit())
                {
                    return Err(invalid());
                }
                if fraction.len() > 2 {
                    return Err(MoneyParseError::TooPrecise(original.to_string()));
                }

                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                let minor: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction.parse().map_err(|_| invalid())?,
                };

                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(minor))
                    .ok_or_else(invalid)?
            }
            None => {
                if !s.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                s.parse::<i64>()
                    .ok()
                    .and_then(|units| units.checked_mul(100))
                    .ok_or_else(invalid)?
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Render as e.g. `₹350.00` or `-$12.05`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.minor())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.minor())
        }
    }

    /// The amount as a floating point number of whole units, for ratios
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(""))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Why an amount string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            Self::TooPrecise(s) => write!(f, "More than two decimal places: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let rent = Money::from_cents(125_099);
        assert_eq!(rent.major(), 1250);
        assert_eq!(rent.minor(), 99);
        assert_eq!(Money::from_major_minor(1250, 99), rent);

        let overspend = Money::from_cents(-305);
        assert_eq!(overspend.major(), -3);
        assert_eq!(overspend.minor(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
        assert_eq!(Money::from_cents(-25).format_with_symbol("$"), "-$0.25");
    }

    #[test]
    fn test_arithmetic() {
        let limit = Money::from_cents(50_000);
        let spent = Money::from_cents(35_000);

        assert_eq!(limit - spent, Money::from_cents(15_000));
        assert_eq!(spent - limit, Money::from_cents(-15_000));
        assert_eq!(-(spent - limit), limit - spent);

        let mut running = Money::zero();
        running += spent;
        running -= limit;
        assert!(running.is_negative());
        assert_eq!(running.abs(), Money::from_cents(15_000));
    }

    #[test]
    fn test_parse() {
        let cases = [
            ("350", 35_000),
            ("350.5", 35_050),
            ("  12.05 ", 1_205),
            ("£7.99", 799),
            ("₹1,250.00", 125_000),
            ("¥300", 30_000),
            ("-4.20", -420),
            (".75", 75),
        ];
        for (input, cents) in cases {
            assert_eq!(Money::parse(input).unwrap().cents(), cents, "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12x").is_err());
        assert!(matches!(
            Money::parse("1.999"),
            Err(MoneyParseError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_sum() {
        let week = vec![Money::from_cents(1_299), Money::from_cents(4_550), Money::from_cents(151)];
        let by_ref: Money = week.iter().sum();
        let by_value: Money = week.into_iter().sum();
        assert_eq!(by_ref, Money::from_cents(6_000));
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn test_exceeds_max() {
        assert!(!Money::MAX.exceeds_max());
        assert!(!(-Money::MAX).exceeds_max());
        assert!((Money::MAX + Money::from_cents(1)).exceeds_max());
        assert!(Money::parse("92233720368547758").unwrap().exceeds_max());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_cents(35_000)).unwrap(), "35000");
        let limit: Money = serde_json::from_str("50000").unwrap();
        assert_eq!(limit.to_string(), "500.00");
    }
}
