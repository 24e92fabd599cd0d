//! Budget model
//!
//! A monthly spending limit for one expense category. The same limit applies
//! to every month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::name_key;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Name of an expense category
    pub category: String,

    /// Monthly limit, always positive
    pub limit: Money,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }

    /// Whether this budget belongs to `category`, compared like category names
    pub fn is_for(&self, category: &str) -> bool {
        name_key(&self.category) == name_key(category)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.limit)
    }
}
