// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derives the visible part of the roster from role and location criteria.
//!
//! The location rule is a soft passthrough: a staff member with no
//! location-bearing assignment in the week always stays visible, so gaps in
//! the schedule are never hidden by a building or floor filter.

use roster_domain::{FilterCriteria, StaffMember, WeekWindow};

/// Returns the staff members passing `criteria` within `week`, in input order.
///
/// Records are returned whole; assignments are not trimmed to the filter.
#[must_use]
pub fn filter_staff<'a>(
    staff: &'a [StaffMember],
    criteria: &FilterCriteria,
    week: &WeekWindow,
) -> Vec<&'a StaffMember> {
    staff
        .iter()
        .filter(|member| passes_role(member, criteria) && passes_location(member, criteria, week))
        .collect()
}

/// Returns whether `member` passes the role criterion.
#[must_use]
pub fn passes_role(member: &StaffMember, criteria: &FilterCriteria) -> bool {
    criteria.role().admits(member.role)
}

/// Returns whether `member` passes the building/floor criteria within `week`.
///
/// Passes when some assignment in the week is in the selected building and
/// some assignment is on the selected floor, or when no assignment in the week
/// references a location at all. The building and floor checks are made per
/// assignment independently: they need not hold for the same assignment.
#[must_use]
pub fn passes_location(member: &StaffMember, criteria: &FilterCriteria, week: &WeekWindow) -> bool {
    if !criteria.has_location() {
        return true;
    }

    let mut any_location: bool = false;
    let mut building_matched: bool = criteria.building().is_none();
    let mut floor_matched: bool = criteria.floor().is_none();

    for assignment in member.assignments_within(week) {
        any_location |= assignment.has_location();
        if let Some(building) = criteria.building() {
            building_matched |= assignment.is_in_building(building);
        }
        if let Some(floor) = criteria.floor() {
            floor_matched |= assignment.is_on_floor(floor);
        }
    }

    (building_matched && floor_matched) || !any_location
}
