// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{at, day, member, monday, test_week};
use crate::{CoverageReport, DailyCoverage, compute_coverage, filter_staff};
use roster_domain::{
    Building, CoverageThresholds, Date, FilterCriteria, Floor, RoleFilter, ShiftAssignment,
    ShiftType, StaffMember, StaffRole,
};

fn report_for(staff: &[StaffMember], criteria: &FilterCriteria) -> CoverageReport {
    let filtered: Vec<&StaffMember> = filter_staff(staff, criteria, &test_week());
    compute_coverage(
        &filtered,
        criteria,
        &test_week(),
        CoverageThresholds::default(),
    )
}

fn split_shift_member() -> StaffMember {
    let mut a: StaffMember = member("A", "A", StaffRole::Nurse);
    a.set_assignments(
        monday(),
        vec![
            at(ShiftType::Morning, "B1", "F1"),
            at(ShiftType::Afternoon, "B2", "F3"),
        ],
    );
    a
}

#[test]
fn test_report_has_one_ascending_entry_per_day() {
    let report: CoverageReport = report_for(&[], &FilterCriteria::default());

    let dates: Vec<Date> = report.days.iter().map(|d| d.date).collect();
    assert_eq!(dates, test_week().dates());
    assert!(report.days.iter().all(|d| d.morning == 0 && d.afternoon == 0 && d.night == 0));
}

#[test]
fn test_split_shift_counts_once_per_shift_type() {
    let report: CoverageReport = report_for(&[split_shift_member()], &FilterCriteria::default());

    let monday_coverage: &DailyCoverage = report.day(monday()).unwrap();
    assert_eq!(monday_coverage.morning, 1);
    assert_eq!(monday_coverage.afternoon, 1);
    assert_eq!(monday_coverage.night, 0);
    assert_eq!(report.total(ShiftType::Morning), 1);
}

#[test]
fn test_counts_only_assignments_matching_location() {
    let criteria: FilterCriteria = FilterCriteria::new(
        RoleFilter::All,
        Some(Building::new("B2")),
        None,
    );

    let report: CoverageReport = report_for(&[split_shift_member()], &criteria);

    let monday_coverage: &DailyCoverage = report.day(monday()).unwrap();
    assert_eq!(monday_coverage.morning, 0);
    assert_eq!(monday_coverage.afternoon, 1);
}

#[test]
fn test_floor_must_match_the_same_assignment() {
    let mut ann: StaffMember = member("S-01", "Ann", StaffRole::Nurse);
    ann.set_assignments(monday(), vec![at(ShiftType::Morning, "B2", "F3")]);
    ann.set_assignments(day(1), vec![at(ShiftType::Afternoon, "B1", "F1")]);
    let criteria: FilterCriteria = FilterCriteria::new(
        RoleFilter::All,
        Some(Building::new("B2")),
        Some(Floor::new("F1")),
    );

    let report: CoverageReport = report_for(&[ann], &criteria);

    // The member passes the staff-level filter but no assignment is {B2, F1}.
    assert_eq!(report.total(ShiftType::Morning), 0);
    assert_eq!(report.total(ShiftType::Afternoon), 0);
}

#[test]
fn test_passthrough_staff_contribute_nothing() {
    let mut unplaced: StaffMember = member("S-01", "Ann", StaffRole::Nurse);
    unplaced.set_assignments(monday(), vec![ShiftAssignment::new(ShiftType::Morning)]);
    let criteria: FilterCriteria = FilterCriteria::new(
        RoleFilter::All,
        Some(Building::new("B1")),
        None,
    );

    let filtered_staff: Vec<StaffMember> = vec![unplaced];
    assert_eq!(
        filter_staff(&filtered_staff, &criteria, &test_week()).len(),
        1
    );
    let report: CoverageReport = report_for(&filtered_staff, &criteria);
    assert_eq!(report.total(ShiftType::Morning), 0);

    let unfiltered: CoverageReport = report_for(&filtered_staff, &FilterCriteria::default());
    assert_eq!(unfiltered.total(ShiftType::Morning), 1);
}

#[test]
fn test_role_filter_limits_counted_staff() {
    let mut ann: StaffMember = member("S-01", "Ann", StaffRole::Nurse);
    ann.set_assignments(monday(), vec![ShiftAssignment::new(ShiftType::Night)]);
    let mut bob: StaffMember = member("S-02", "Bob", StaffRole::Physician);
    bob.set_assignments(monday(), vec![ShiftAssignment::new(ShiftType::Night)]);
    let criteria: FilterCriteria =
        FilterCriteria::default().with_role(RoleFilter::Only(StaffRole::Physician));

    let report: CoverageReport = report_for(&[ann, bob], &criteria);

    assert_eq!(report.day(monday()).unwrap().night, 1);
}

#[test]
fn test_under_coverage_uses_thresholds() {
    let mut ann: StaffMember = member("S-01", "Ann", StaffRole::Nurse);
    ann.set_assignments(
        monday(),
        vec![
            ShiftAssignment::new(ShiftType::Morning),
            ShiftAssignment::new(ShiftType::Night),
        ],
    );
    let mut bob: StaffMember = member("S-02", "Bob", StaffRole::Nurse);
    bob.set_assignments(monday(), vec![ShiftAssignment::new(ShiftType::Morning)]);

    let report: CoverageReport = report_for(&[ann, bob], &FilterCriteria::default());

    assert!(!report.is_under_covered(monday(), ShiftType::Morning));
    assert!(report.is_under_covered(monday(), ShiftType::Afternoon));
    assert!(!report.is_under_covered(monday(), ShiftType::Night));
    assert_eq!(
        report.day(monday()).unwrap().under_covered(&report.thresholds),
        vec![ShiftType::Afternoon]
    );
    // Every other day is short on all three shifts.
    assert_eq!(report.under_covered().len(), 1 + 6 * 3);
}

#[test]
fn test_custom_thresholds_are_respected() {
    let thresholds: CoverageThresholds = CoverageThresholds {
        morning: 0,
        afternoon: 0,
        night: 0,
    };

    let report: CoverageReport =
        compute_coverage(&[], &FilterCriteria::default(), &test_week(), thresholds);

    assert!(report.under_covered().is_empty());
}
