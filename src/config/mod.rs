//! Configuration for moneta-core
//!
//! Holds the user settings model. Loading and saving go through the
//! `storage::SettingsStore` trait implemented by the host.

pub mod settings;

pub use settings::Settings;
