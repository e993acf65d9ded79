//! Core data models for moneta-core
//!
//! This module contains the data structures that represent the domain:
//! transactions, period kinds, resolved date ranges, and category shares.

pub mod ids;
pub mod period;
pub mod share;
pub mod transaction;

pub use ids::TransactionId;
pub use period::{DateRange, PeriodKind, PeriodParseError};
pub use share::CategoryShare;
pub use transaction::Transaction;
