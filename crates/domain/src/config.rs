// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::ShiftType;
use serde::{Deserialize, Serialize};
use time::Weekday;

/// Minimum head-count per shift below which a day is flagged as under-covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageThresholds {
    /// Minimum for the morning shift.
    pub morning: u32,
    /// Minimum for the afternoon shift.
    pub afternoon: u32,
    /// Minimum for the night shift.
    pub night: u32,
}

impl Default for CoverageThresholds {
    fn default() -> Self {
        Self {
            morning: 2,
            afternoon: 2,
            night: 1,
        }
    }
}

impl CoverageThresholds {
    /// Returns the minimum for `shift`.
    #[must_use]
    pub const fn minimum(&self, shift: ShiftType) -> u32 {
        match shift {
            ShiftType::Morning => self.morning,
            ShiftType::Afternoon => self.afternoon,
            ShiftType::Night => self.night,
        }
    }

    /// Returns whether `count` is below the minimum for `shift`.
    #[must_use]
    pub const fn is_under(&self, shift: ShiftType, count: u32) -> bool {
        count < self.minimum(shift)
    }
}

/// Roster-wide configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// The weekday every week window starts on.
    pub week_start: Weekday,
    /// Under-coverage thresholds.
    #[serde(default)]
    pub thresholds: CoverageThresholds,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Monday,
            thresholds: CoverageThresholds::default(),
        }
    }
}
