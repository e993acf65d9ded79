//! Reports
//!
//! One-call summaries computed from a transaction store.

pub mod period_summary;

pub use period_summary::PeriodSummary;
