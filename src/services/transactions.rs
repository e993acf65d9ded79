//! Transaction service
//!
//! The host-facing facade: CRUD against the injected store plus the
//! period-windowed queries the presentation layer is built on. Every query
//! takes the reference instant explicitly; re-running one after a mutation
//! (or when `needs_refresh` fires) is the only invalidation mechanism.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::MonetaResult;
use crate::models::{CategoryShare, PeriodKind, Transaction, TransactionId};
use crate::services::{aggregate, filter, period};
use crate::storage::TransactionStore;

/// Service for transaction management and period queries
pub struct TransactionService<'a, S: TransactionStore> {
    store: &'a S,
}

impl<'a, S: TransactionStore> TransactionService<'a, S> {
    /// Create a new transaction service over a store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Add a new transaction
    pub fn add(&self, transaction: Transaction) -> MonetaResult<Transaction> {
        debug!(id = %transaction.id, amount = transaction.amount, "adding transaction");
        self.store.insert(transaction.clone())?;
        Ok(transaction)
    }

    /// Replace an existing transaction
    pub fn update(&self, transaction: Transaction) -> MonetaResult<()> {
        debug!(id = %transaction.id, "updating transaction");
        self.store.update(transaction)
    }

    /// Delete a transaction
    pub fn remove(&self, id: TransactionId) -> MonetaResult<()> {
        debug!(%id, "removing transaction");
        self.store.remove(id)
    }

    /// Fetch a single transaction
    pub fn get(&self, id: TransactionId) -> MonetaResult<Option<Transaction>> {
        self.store.get(id)
    }

    /// Snapshot of every transaction, in insertion order
    pub fn list(&self) -> MonetaResult<Vec<Transaction>> {
        self.store.list()
    }

    /// Transactions falling in the selected period window
    pub fn transactions_for_period(
        &self,
        kind: PeriodKind,
        reference: NaiveDateTime,
        month_offset: i32,
    ) -> MonetaResult<Vec<Transaction>> {
        let range = period::resolve_range(kind, reference, month_offset);
        let transactions = self.store.list()?;
        let matching = filter::filter_by_range(&transactions, &range);
        debug!(
            %kind,
            month_offset,
            matched = matching.len(),
            total = transactions.len(),
            "filtered transactions for period"
        );
        Ok(matching)
    }

    /// Total spent in the selected period (sum of absolute expense amounts)
    pub fn expenses_for_period(
        &self,
        kind: PeriodKind,
        reference: NaiveDateTime,
        month_offset: i32,
    ) -> MonetaResult<f64> {
        let matching = self.transactions_for_period(kind, reference, month_offset)?;
        Ok(aggregate::total_expenses(&matching))
    }

    /// Total earned in the selected period
    pub fn income_for_period(
        &self,
        kind: PeriodKind,
        reference: NaiveDateTime,
        month_offset: i32,
    ) -> MonetaResult<f64> {
        let matching = self.transactions_for_period(kind, reference, month_offset)?;
        Ok(aggregate::total_income(&matching))
    }

    /// Per-category expense shares for the selected period
    pub fn expense_shares_for_period(
        &self,
        kind: PeriodKind,
        reference: NaiveDateTime,
        month_offset: i32,
    ) -> MonetaResult<Vec<CategoryShare>> {
        let matching = self.transactions_for_period(kind, reference, month_offset)?;
        Ok(aggregate::expense_shares(&matching))
    }

    /// Per-category income shares for the selected period
    pub fn income_shares_for_period(
        &self,
        kind: PeriodKind,
        reference: NaiveDateTime,
        month_offset: i32,
    ) -> MonetaResult<Vec<CategoryShare>> {
        let matching = self.transactions_for_period(kind, reference, month_offset)?;
        Ok(aggregate::income_shares(&matching))
    }

    /// Transactions dated after today, ascending by timestamp
    pub fn upcoming(&self, now: NaiveDateTime) -> MonetaResult<Vec<Transaction>> {
        let transactions = self.store.list()?;
        Ok(filter::partition_future_vs_past(&transactions, now).future)
    }

    /// Past transactions grouped by calendar day
    ///
    /// Within a day the most recently inserted transaction comes first;
    /// iterate the map's keys in reverse for newest-day-first display.
    pub fn grouped_history(
        &self,
        now: NaiveDateTime,
    ) -> MonetaResult<BTreeMap<NaiveDate, Vec<Transaction>>> {
        let transactions = self.store.list()?;
        let split = filter::partition_future_vs_past(&transactions, now);
        Ok(filter::group_by_calendar_day(&split.past))
    }

    /// Whether any future-dated transaction's day has arrived
    ///
    /// Hosts call this once per minute and whenever they return to the
    /// foreground, re-running their queries when it reports true; the
    /// engine itself runs no timers.
    pub fn needs_refresh(&self, now: NaiveDateTime) -> MonetaResult<bool> {
        let transactions = self.store.list()?;
        let due = filter::any_due_for_rollover(&transactions, now);
        if due {
            debug!("future-dated transactions have become current");
        }
        Ok(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTransactionStore;
    use chrono::NaiveDate;

    fn txn(amount: f64, category: &str, month: u32, day: u32) -> Transaction {
        Transaction::new(
            "test",
            amount,
            category,
            NaiveDate::from_ymd_opt(2024, month, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn seeded_store() -> MemoryTransactionStore {
        MemoryTransactionStore::with_transactions(vec![
            txn(1000.0, "Salary", 5, 1),
            txn(-50.0, "Food", 5, 3),
            txn(-50.0, "Car", 5, 10),
            txn(-80.0, "Rent", 4, 2),
            txn(-5.0, "Food", 6, 20),
        ])
    }

    #[test]
    fn test_period_queries() {
        let store = seeded_store();
        let service = TransactionService::new(&store);
        let reference = at(5, 15, 12);

        let may = service
            .transactions_for_period(PeriodKind::FromFirst, reference, 0)
            .unwrap();
        assert_eq!(may.len(), 3);

        assert_eq!(
            service
                .expenses_for_period(PeriodKind::FromFirst, reference, 0)
                .unwrap(),
            100.0
        );
        assert_eq!(
            service
                .income_for_period(PeriodKind::FromFirst, reference, 0)
                .unwrap(),
            1000.0
        );
    }

    #[test]
    fn test_month_offset_moves_the_window() {
        let store = seeded_store();
        let service = TransactionService::new(&store);

        let april = service
            .transactions_for_period(PeriodKind::FromFirst, at(5, 15, 12), -1)
            .unwrap();
        assert_eq!(april.len(), 1);
        assert_eq!(april[0].category, "Rent");
    }

    #[test]
    fn test_share_queries() {
        let store = seeded_store();
        let service = TransactionService::new(&store);
        let reference = at(5, 15, 12);

        let expenses = service
            .expense_shares_for_period(PeriodKind::FromFirst, reference, 0)
            .unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].category, "Car");
        assert_eq!(expenses[1].category, "Food");

        let income = service
            .income_shares_for_period(PeriodKind::FromFirst, reference, 0)
            .unwrap();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].percentage, 1.0);
    }

    #[test]
    fn test_upcoming_and_history_split() {
        let store = seeded_store();
        let service = TransactionService::new(&store);
        let now = at(5, 15, 12);

        let upcoming = service.upcoming(now).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].category, "Food");

        let history = service.grouped_history(now).unwrap();
        let total: usize = history.values().map(|v| v.len()).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_mutations_are_visible_to_queries() {
        let store = MemoryTransactionStore::new();
        let service = TransactionService::new(&store);
        let reference = at(5, 15, 12);

        let added = service.add(txn(-30.0, "Food", 5, 4)).unwrap();
        assert_eq!(
            service
                .expenses_for_period(PeriodKind::FromFirst, reference, 0)
                .unwrap(),
            30.0
        );

        let mut edited = added.clone();
        edited.amount = -40.0;
        service.update(edited).unwrap();
        assert_eq!(
            service
                .expenses_for_period(PeriodKind::FromFirst, reference, 0)
                .unwrap(),
            40.0
        );

        service.remove(added.id).unwrap();
        assert_eq!(
            service
                .expenses_for_period(PeriodKind::FromFirst, reference, 0)
                .unwrap(),
            0.0
        );
    }

    #[test]
    fn test_needs_refresh_tracks_the_clock() {
        let store = MemoryTransactionStore::with_transactions(vec![txn(-10.0, "Food", 5, 15)]);
        let service = TransactionService::new(&store);

        // Transaction at noon: pending while the morning clock runs, settled
        // once now has passed it.
        assert!(service.needs_refresh(at(5, 15, 9)).unwrap());
        assert!(!service.needs_refresh(at(5, 15, 13)).unwrap());
        // The day before, it is still future by day: nothing to refresh.
        assert!(!service.needs_refresh(at(5, 14, 9)).unwrap());
    }
}
