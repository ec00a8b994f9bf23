//! Engine-wide tunables.
//!
//! None of these are per-indicator today. They live in one struct so a
//! caller can override them without touching the functions that read them.

use serde::{Deserialize, Serialize};

use crate::indicators::achievement_classifier::AchievementThresholds;
use crate::indicators::time_series::{MissingGoalPolicy, DEFAULT_MISSING_GOAL_POLICY};

/// Calendar day of month from which a book missing last month's data is stale.
pub const DEFAULT_STALE_CUTOFF_DAY: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingSettings {
    pub thresholds: AchievementThresholds,
    /// Calendar day, not business day.
    pub stale_cutoff_day: u32,
    pub missing_goal_policy: MissingGoalPolicy,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            thresholds: AchievementThresholds::default(),
            stale_cutoff_day: DEFAULT_STALE_CUTOFF_DAY,
            missing_goal_policy: DEFAULT_MISSING_GOAL_POLICY,
        }
    }
}

impl TrackingSettings {
    pub fn with_stale_cutoff_day(mut self, day: u32) -> Self {
        self.stale_cutoff_day = day;
        self
    }
}
