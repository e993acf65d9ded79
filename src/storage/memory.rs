//! In-memory store implementations
//!
//! Backing for tests and for hosts that load everything up front. Interior
//! mutability through `RwLock` so stores can be shared behind `&` references.

use std::sync::RwLock;

use crate::config::Settings;
use crate::error::{MonetaError, MonetaResult};
use crate::models::{Transaction, TransactionId};

use super::{SettingsStore, TransactionStore};

/// Transaction repository held entirely in memory
///
/// Transactions are kept in insertion order, which `list` exposes verbatim.
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    data: RwLock<Vec<Transaction>>,
}

impl MemoryTransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing transactions
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            data: RwLock::new(transactions),
        }
    }

    fn read(&self) -> MonetaResult<std::sync::RwLockReadGuard<'_, Vec<Transaction>>> {
        self.data
            .read()
            .map_err(|e| MonetaError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> MonetaResult<std::sync::RwLockWriteGuard<'_, Vec<Transaction>>> {
        self.data
            .write()
            .map_err(|e| MonetaError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn insert(&self, transaction: Transaction) -> MonetaResult<()> {
        let mut data = self.write()?;
        if data.iter().any(|t| t.id == transaction.id) {
            return Err(MonetaError::duplicate_transaction(transaction.id.to_string()));
        }
        data.push(transaction);
        Ok(())
    }

    fn update(&self, transaction: Transaction) -> MonetaResult<()> {
        let mut data = self.write()?;
        match data.iter_mut().find(|t| t.id == transaction.id) {
            Some(slot) => {
                *slot = transaction;
                Ok(())
            }
            None => Err(MonetaError::transaction_not_found(
                transaction.id.to_string(),
            )),
        }
    }

    fn remove(&self, id: TransactionId) -> MonetaResult<()> {
        let mut data = self.write()?;
        let before = data.len();
        data.retain(|t| t.id != id);
        if data.len() == before {
            return Err(MonetaError::transaction_not_found(id.to_string()));
        }
        Ok(())
    }

    fn get(&self, id: TransactionId) -> MonetaResult<Option<Transaction>> {
        let data = self.read()?;
        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    fn list(&self) -> MonetaResult<Vec<Transaction>> {
        let data = self.read()?;
        Ok(data.clone())
    }
}

/// Settings store held entirely in memory
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    data: RwLock<Settings>,
}

impl MemorySettingsStore {
    /// Create a store with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with existing settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            data: RwLock::new(settings),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> MonetaResult<Settings> {
        self.data
            .read()
            .map(|s| s.clone())
            .map_err(|e| MonetaError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn save(&self, settings: &Settings) -> MonetaResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MonetaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodKind;
    use chrono::NaiveDate;

    fn sample(amount: f64, day: u32) -> Transaction {
        Transaction::new(
            "test",
            amount,
            "Misc",
            NaiveDate::from_ymd_opt(2024, 5, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_insert_and_get() {
        let store = MemoryTransactionStore::new();
        let txn = sample(-10.0, 3);
        let id = txn.id;

        store.insert(txn.clone()).unwrap();
        assert_eq!(store.get(id).unwrap(), Some(txn));
    }

    #[test]
    fn test_insert_duplicate_fails() {
        let store = MemoryTransactionStore::new();
        let txn = sample(-10.0, 3);
        store.insert(txn.clone()).unwrap();

        let err = store.insert(txn).unwrap_err();
        assert!(matches!(err, MonetaError::Duplicate { .. }));
    }

    #[test]
    fn test_update_missing_fails() {
        let store = MemoryTransactionStore::new();
        let err = store.update(sample(-10.0, 3)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = MemoryTransactionStore::new();
        let mut txn = sample(-10.0, 3);
        store.insert(txn.clone()).unwrap();
        store.insert(sample(-20.0, 4)).unwrap();

        txn.amount = -15.0;
        store.update(txn.clone()).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed[0].amount, -15.0);
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn test_remove() {
        let store = MemoryTransactionStore::new();
        let txn = sample(-10.0, 3);
        let id = txn.id;
        store.insert(txn).unwrap();

        store.remove(id).unwrap();
        assert_eq!(store.get(id).unwrap(), None);
        assert!(store.remove(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MemoryTransactionStore::new();
        let first = sample(-1.0, 9);
        let second = sample(-2.0, 3);
        let third = sample(-3.0, 6);
        store.insert(first.clone()).unwrap();
        store.insert(second.clone()).unwrap();
        store.insert(third.clone()).unwrap();

        let ids: Vec<_> = store.list().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn test_settings_store_round_trip() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.load().unwrap(), Settings::default());

        let mut settings = Settings::default();
        settings.select_period(PeriodKind::FromFifteenth);
        settings.set_month_offset(-2);
        store.save(&settings).unwrap();

        assert_eq!(store.load().unwrap(), settings);
    }
}
