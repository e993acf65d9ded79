//! User settings for moneta-core hosts
//!
//! The scalar preferences the engine is driven by: which billing period is
//! selected, which month the user has navigated to, and whether the welcome
//! flow has been seen. Persistence belongs to the host's `SettingsStore`.

use serde::{Deserialize, Serialize};

use crate::models::PeriodKind;

/// User preferences consumed by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// The billing period the user has selected
    #[serde(default)]
    pub selected_period: PeriodKind,

    /// Months navigated away from the current one (negative = past)
    #[serde(default)]
    pub month_offset: i32,

    /// Whether the welcome flow has been completed
    #[serde(default)]
    pub has_seen_welcome: bool,
}

impl Settings {
    /// Select a different billing period
    ///
    /// The month offset is intentionally left untouched: switching period
    /// keeps the user on the month they navigated to.
    pub fn select_period(&mut self, period: PeriodKind) {
        self.selected_period = period;
    }

    /// Navigate to a different month offset
    pub fn set_month_offset(&mut self, offset: i32) {
        self.month_offset = offset;
    }

    /// Jump back to the current month
    pub fn reset_to_current_month(&mut self) {
        self.month_offset = 0;
    }

    /// Record that the welcome flow has been seen
    pub fn mark_welcome_seen(&mut self) {
        self.has_seen_welcome = true;
    }
}
