// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-day, per-shift head counts over the filtered roster.
//!
//! Unlike staff-level filtering, every counted assignment must itself match
//! the building and floor criteria. Staff kept visible by the passthrough
//! rule therefore contribute nothing.

use roster_domain::{CoverageThresholds, Date, FilterCriteria, ShiftType, StaffMember, WeekWindow};
use serde::Serialize;

/// Head counts for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCoverage {
    /// The date counted.
    pub date: Date,
    /// Morning assignments.
    pub morning: u32,
    /// Afternoon assignments.
    pub afternoon: u32,
    /// Night assignments.
    pub night: u32,
}

impl DailyCoverage {
    const fn empty(date: Date) -> Self {
        Self {
            date,
            morning: 0,
            afternoon: 0,
            night: 0,
        }
    }

    /// Returns the count for `shift`.
    #[must_use]
    pub const fn count(&self, shift: ShiftType) -> u32 {
        match shift {
            ShiftType::Morning => self.morning,
            ShiftType::Afternoon => self.afternoon,
            ShiftType::Night => self.night,
        }
    }

    /// Returns the shifts of this date whose count is below threshold.
    #[must_use]
    pub fn under_covered(&self, thresholds: &CoverageThresholds) -> Vec<ShiftType> {
        ShiftType::ALL
            .into_iter()
            .filter(|shift| thresholds.is_under(*shift, self.count(*shift)))
            .collect()
    }

    fn increment(&mut self, shift: ShiftType) {
        match shift {
            ShiftType::Morning => self.morning = self.morning.saturating_add(1),
            ShiftType::Afternoon => self.afternoon = self.afternoon.saturating_add(1),
            ShiftType::Night => self.night = self.night.saturating_add(1),
        }
    }
}

/// Coverage for a whole week, ascending by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// One entry per date of the week.
    pub days: Vec<DailyCoverage>,
    /// The thresholds used for flagging.
    pub thresholds: CoverageThresholds,
}

impl CoverageReport {
    /// Returns the coverage for `date`, if it belongs to the week.
    #[must_use]
    pub fn day(&self, date: Date) -> Option<&DailyCoverage> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Returns the weekly total for `shift`.
    #[must_use]
    pub fn total(&self, shift: ShiftType) -> u32 {
        self.days.iter().map(|day| day.count(shift)).sum()
    }

    /// Returns whether `shift` on `date` is below threshold.
    #[must_use]
    pub fn is_under_covered(&self, date: Date, shift: ShiftType) -> bool {
        self.day(date)
            .is_some_and(|day| self.thresholds.is_under(shift, day.count(shift)))
    }

    /// Returns every under-covered (date, shift) pair in date then shift order.
    #[must_use]
    pub fn under_covered(&self) -> Vec<(Date, ShiftType)> {
        self.days
            .iter()
            .flat_map(|day| {
                day.under_covered(&self.thresholds)
                    .into_iter()
                    .map(move |shift| (day.date, shift))
            })
            .collect()
    }
}

/// Counts assignments per date and shift type for already-filtered staff.
///
/// # Arguments
///
/// * `filtered` - Staff members passing the filter engine
/// * `criteria` - The active criteria; each assignment must match its location part
/// * `week` - The dates to count
/// * `thresholds` - Under-coverage thresholds carried into the report
#[must_use]
pub fn compute_coverage(
    filtered: &[&StaffMember],
    criteria: &FilterCriteria,
    week: &WeekWindow,
    thresholds: CoverageThresholds,
) -> CoverageReport {
    let days: Vec<DailyCoverage> = week
        .dates()
        .into_iter()
        .map(|date| {
            let mut day: DailyCoverage = DailyCoverage::empty(date);
            filtered
                .iter()
                .flat_map(|member| member.assignments_on(date))
                .filter(|assignment| {
                    assignment.matches_location(criteria.building(), criteria.floor())
                })
                .for_each(|assignment| day.increment(assignment.shift_type));
            day
        })
        .collect();

    CoverageReport { days, thresholds }
}
