//! Storage boundary for moneta-core
//!
//! The engine never owns persistence. Hosts provide a transaction repository
//! and a settings store behind these traits and hand the engine read-only
//! snapshots; the in-memory implementations cover tests and hosts that keep
//! everything resident.

pub mod memory;

use crate::config::Settings;
use crate::error::MonetaResult;
use crate::models::{Transaction, TransactionId};

pub use memory::{MemorySettingsStore, MemoryTransactionStore};

/// CRUD + list access to the canonical transaction collection
///
/// `list` must preserve insertion order: the future/past partition and the
/// grouped history both derive their within-day ordering from it.
pub trait TransactionStore {
    /// Add a new transaction; fails with `Duplicate` if the id already exists
    fn insert(&self, transaction: Transaction) -> MonetaResult<()>;

    /// Replace an existing transaction; fails with `NotFound` if missing
    fn update(&self, transaction: Transaction) -> MonetaResult<()>;

    /// Delete a transaction; fails with `NotFound` if missing
    fn remove(&self, id: TransactionId) -> MonetaResult<()>;

    /// Fetch a single transaction by id
    fn get(&self, id: TransactionId) -> MonetaResult<Option<Transaction>>;

    /// Snapshot of every transaction, in insertion order
    fn list(&self) -> MonetaResult<Vec<Transaction>>;
}

/// Get/set access to the scalar user preferences
pub trait SettingsStore {
    /// Read the current settings
    fn load(&self) -> MonetaResult<Settings>;

    /// Persist new settings
    fn save(&self, settings: &Settings) -> MonetaResult<()>;
}
