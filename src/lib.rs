//! moneta-core - Period-windowed transaction engine for personal finance apps
//!
//! This library implements the billing-period resolution, transaction
//! filtering, and category aggregation logic of a personal finance tracker.
//! It owns no persistence, no clock, and no UI: hosts inject a transaction
//! store and a reference instant, and get plain data back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: User settings model
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, periods, shares)
//! - `locale`: Name tables and amount formatting for labels
//! - `storage`: Store traits and in-memory implementations
//! - `services`: Business logic (period resolution, filtering, aggregation)
//! - `reports`: One-call period summaries
//! - `export`: JSON snapshot and CSV serialization
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use moneta_core::models::{PeriodKind, Transaction};
//! use moneta_core::services::period::resolve_range;
//! use moneta_core::services::aggregate::expense_shares;
//! use moneta_core::services::filter::filter_by_range;
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 5, 15)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! let transactions = vec![
//!     Transaction::new("Lunch", -12.5, "Food", reference),
//! ];
//!
//! let range = resolve_range(PeriodKind::FromFirst, reference, 0);
//! let in_period = filter_by_range(&transactions, &range);
//! let shares = expense_shares(&in_period);
//! assert_eq!(shares[0].category, "Food");
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod locale;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{MonetaError, MonetaResult};
