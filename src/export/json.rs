//! JSON snapshot export functionality
//!
//! Serializes the full data set (transactions plus settings) to a versioned
//! JSON document and reads it back with validation. Strictly a data
//! transformation: where the document is stored, and when, is the host's
//! concern.

use std::io::Write;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{MonetaError, MonetaResult};
use crate::models::Transaction;
use crate::storage::TransactionStore;

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data set export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// When the snapshot was taken (supplied by the caller)
    pub exported_at: NaiveDateTime,

    /// User settings at export time
    pub settings: Settings,

    /// All transactions
    pub transactions: Vec<Transaction>,

    /// Snapshot metadata
    pub metadata: SnapshotMetadata,
}

/// Snapshot metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Total number of transactions
    pub transaction_count: usize,

    /// Earliest transaction timestamp
    pub earliest_transaction: Option<String>,

    /// Latest transaction timestamp
    pub latest_transaction: Option<String>,
}

impl Snapshot {
    /// Build a snapshot from in-memory data
    pub fn new(
        transactions: Vec<Transaction>,
        settings: Settings,
        exported_at: NaiveDateTime,
    ) -> Self {
        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());
        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = SnapshotMetadata {
            transaction_count: transactions.len(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            exported_at,
            settings,
            transactions,
            metadata,
        }
    }

    /// Build a snapshot from a store
    pub fn from_store<S: TransactionStore>(
        store: &S,
        settings: Settings,
        exported_at: NaiveDateTime,
    ) -> MonetaResult<Self> {
        Ok(Self::new(store.list()?, settings, exported_at))
    }

    /// Validate the snapshot structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                SNAPSHOT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.transaction_count != self.transactions.len() {
            return Err(format!(
                "Metadata count {} does not match {} transactions",
                self.metadata.transaction_count,
                self.transactions.len()
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for txn in &self.transactions {
            if !seen.insert(txn.id) {
                return Err(format!("Duplicate transaction id: {}", txn.id));
            }
        }

        Ok(())
    }
}

/// Write a snapshot as JSON
pub fn write_snapshot_json<W: Write>(
    snapshot: &Snapshot,
    writer: &mut W,
    pretty: bool,
) -> MonetaResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, snapshot)
    } else {
        serde_json::to_writer(writer, snapshot)
    }
    .map_err(|e| MonetaError::Export(e.to_string()))?;

    Ok(())
}

/// Read a snapshot back from JSON, validating it
pub fn read_snapshot_json(json_str: &str) -> MonetaResult<Snapshot> {
    let snapshot: Snapshot =
        serde_json::from_str(json_str).map_err(|e| MonetaError::Import(e.to_string()))?;

    snapshot.validate().map_err(MonetaError::Import)?;

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodKind;
    use crate::storage::MemoryTransactionStore;
    use chrono::NaiveDate;
    use std::io::Write as _;

    fn txn(amount: f64, category: &str, day: u32) -> Transaction {
        Transaction::new(
            "test",
            amount,
            category,
            NaiveDate::from_ymd_opt(2024, 5, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn exported_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_snapshot_metadata() {
        let snapshot = Snapshot::new(
            vec![txn(-10.0, "Food", 3), txn(20.0, "Salary", 10)],
            Settings::default(),
            exported_at(),
        );

        assert_eq!(snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(snapshot.metadata.transaction_count, 2);
        assert_eq!(
            snapshot.metadata.earliest_transaction.as_deref(),
            Some("2024-05-03 12:00:00")
        );
        assert_eq!(
            snapshot.metadata.latest_transaction.as_deref(),
            Some("2024-05-10 12:00:00")
        );
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.select_period(PeriodKind::FromTenth);
        let store =
            MemoryTransactionStore::with_transactions(vec![txn(-10.0, "Food", 3)]);

        let snapshot = Snapshot::from_store(&store, settings.clone(), exported_at()).unwrap();

        let mut output = Vec::new();
        write_snapshot_json(&snapshot, &mut output, true).unwrap();
        let json = String::from_utf8(output).unwrap();

        let imported = read_snapshot_json(&json).unwrap();
        assert_eq!(imported.settings, settings);
        assert_eq!(imported.transactions.len(), 1);
        assert_eq!(imported.transactions[0].category, "Food");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let duplicated = txn(-10.0, "Food", 3);
        let snapshot = Snapshot::new(
            vec![duplicated.clone(), duplicated],
            Settings::default(),
            exported_at(),
        );

        let err = snapshot.validate().unwrap_err();
        assert!(err.contains("Duplicate transaction id"));
    }

    #[test]
    fn test_schema_version_mismatch_rejected() {
        let mut snapshot = Snapshot::new(Vec::new(), Settings::default(), exported_at());
        snapshot.schema_version = "0.9.0".to_string();

        let json = serde_json::to_string(&snapshot).unwrap();
        let err = read_snapshot_json(&json).unwrap_err();
        assert!(matches!(err, MonetaError::Import(_)));
    }

    #[test]
    fn test_write_to_file() {
        let snapshot = Snapshot::new(
            vec![txn(-10.0, "Food", 3)],
            Settings::default(),
            exported_at(),
        );

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write_snapshot_json(&snapshot, &mut file, false).unwrap();
        file.flush().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let imported = read_snapshot_json(&contents).unwrap();
        assert_eq!(imported.transactions.len(), 1);
    }
}
