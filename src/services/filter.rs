//! Transaction filtering and partitioning
//!
//! Filters a transaction snapshot against a resolved date range, splits it
//! into future and past buckets at calendar-day granularity, and groups the
//! past bucket by day for display.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{DateRange, Transaction};

/// The future/past split of a transaction snapshot
///
/// Membership is decided by calendar day, not exact timestamp: a transaction
/// dated today at 23:59 is `past` even when "now" is today at 00:01.
#[derive(Debug, Clone, Default)]
pub struct DayPartition {
    /// Transactions dated tomorrow or later, ascending by timestamp
    pub future: Vec<Transaction>,

    /// Transactions dated today or earlier, most recently inserted first
    pub past: Vec<Transaction>,
}

/// Transactions whose timestamp falls inside the range, input order preserved
pub fn filter_by_range(transactions: &[Transaction], range: &DateRange) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| range.contains(t.date))
        .cloned()
        .collect()
}

/// Split a snapshot into future and past buckets at day granularity
///
/// The past bucket keeps the input's relative order and is then reversed,
/// so the most recently inserted transaction comes first. Callers that
/// group by day afterwards rely on that within-day order.
pub fn partition_future_vs_past(
    transactions: &[Transaction],
    now: NaiveDateTime,
) -> DayPartition {
    let today = now.date();

    let mut future: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.calendar_day() > today)
        .cloned()
        .collect();
    future.sort_by(|a, b| a.date.cmp(&b.date));

    let mut past: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.calendar_day() <= today)
        .cloned()
        .collect();
    past.reverse();

    DayPartition { future, past }
}

/// Group transactions by calendar day
///
/// Within each day the input order is kept; feed this the `past` bucket of
/// `partition_future_vs_past` to preserve its most-recent-first order. Keys
/// iterate ascending, so consumers wanting newest-day-first use `.rev()`.
pub fn group_by_calendar_day(
    transactions: &[Transaction],
) -> BTreeMap<NaiveDate, Vec<Transaction>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for transaction in transactions {
        grouped
            .entry(transaction.calendar_day())
            .or_default()
            .push(transaction.clone());
    }
    grouped
}

/// Check whether a transaction's day has arrived while its exact timestamp
/// is still ahead of the clock
///
/// This is the signal that a future-dated transaction should flip to the
/// past bucket soon; hosts re-run the partition when it fires. It never
/// changes bucket membership by itself.
pub fn due_for_rollover(transaction: &Transaction, now: NaiveDateTime) -> bool {
    transaction.calendar_day() <= now.date() && transaction.date > now
}

/// Check whether any transaction in the snapshot is due for rollover
pub fn any_due_for_rollover(transactions: &[Transaction], now: NaiveDateTime) -> bool {
    transactions.iter().any(|t| due_for_rollover(t, now))
}
