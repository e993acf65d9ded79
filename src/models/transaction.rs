//! Transaction model
//!
//! A transaction is an immutable value: the sign of `amount` determines
//! whether it is an expense (negative) or income (positive).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (stable across edits)
    pub id: TransactionId,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,

    /// Signed amount: negative = expense, positive = income
    pub amount: f64,

    /// Free-text category name; display preserves the stored casing
    #[serde(default)]
    pub category: String,

    /// Timestamp of the transaction; both date and time-of-day matter
    pub date: NaiveDateTime,
}

impl Transaction {
    /// Create a new transaction with a fresh random ID
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// The transaction's calendar day (time-of-day stripped)
    pub fn calendar_day(&self) -> NaiveDate {
        self.date.date()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}
