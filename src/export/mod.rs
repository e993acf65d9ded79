//! Export functionality
//!
//! Writer-based serialization of the data set: JSON snapshots with schema
//! versioning and CSV transaction dumps.

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::{read_snapshot_json, write_snapshot_json, Snapshot, SNAPSHOT_SCHEMA_VERSION};
