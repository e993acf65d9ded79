//! Category share model
//!
//! A derived value: one category's total and its fraction of the relevant
//! (expense or income) grand total. Recomputed on every aggregation call,
//! never persisted.

use serde::{Deserialize, Serialize};

/// One category's slice of a period's expenses or income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name, exactly as stored on the transactions
    pub category: String,

    /// Total for the category, always non-negative
    pub amount: f64,

    /// Fraction of the grand total, in [0, 1]
    pub percentage: f64,
}

impl CategoryShare {
    /// Create a new share
    pub fn new(category: impl Into<String>, amount: f64, percentage: f64) -> Self {
        Self {
            category: category.into(),
            amount,
            percentage,
        }
    }
}
