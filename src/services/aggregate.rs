//! Category aggregation
//!
//! Computes per-category totals and normalized shares, separately for the
//! expense side (negative amounts) and income side (positive amounts).
//! Zero-amount transactions belong to neither side. Degenerate inputs yield
//! empty results, never errors.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{CategoryShare, Transaction};

/// Two shares whose percentages differ by less than this are considered
/// tied and fall back to alphabetical order.
pub const SHARE_TIE_TOLERANCE: f64 = 0.001;

/// Sum of absolute expense amounts
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount.abs())
        .sum()
}

/// Sum of income amounts
pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Signed sum of every amount (the running balance of the slice)
pub fn net_total(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// Per-category expense shares, largest first
///
/// Buckets are keyed on the literal stored category string. Returns an empty
/// vec when there are no expenses. Shares within `SHARE_TIE_TOLERANCE` of
/// each other sort by ascending category name so output is deterministic.
pub fn expense_shares(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let total = total_expenses(transactions);
    if total <= 0.0 {
        return Vec::new();
    }

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) +=
            transaction.amount.abs();
    }

    into_sorted_shares(totals, total)
}

/// Per-category income shares, largest first
///
/// Symmetric to `expense_shares` with the same zero-total and tie-break
/// rules.
pub fn income_shares(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let total = total_income(transactions);
    if total <= 0.0 {
        return Vec::new();
    }

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.is_income()) {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
    }

    into_sorted_shares(totals, total)
}

fn into_sorted_shares(totals: HashMap<&str, f64>, grand_total: f64) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, amount)| CategoryShare::new(category, amount, amount / grand_total))
        .collect();

    shares.sort_by(|a, b| {
        if (a.percentage - b.percentage).abs() > SHARE_TIE_TOLERANCE {
            b.percentage.partial_cmp(&a.percentage).unwrap_or(Ordering::Equal)
        } else {
            a.category.cmp(&b.category)
        }
    });

    shares
}
