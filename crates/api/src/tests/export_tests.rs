// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{MONDAY, create_test_assignment, create_test_member, create_test_week};
use crate::{EXPORT_CONTENT_TYPE, OFF_CELL, RosterExport, export_filename, export_week, render_cell};
use roster_domain::{Building, ShiftAssignment, ShiftType, StaffMember, StaffRole};

fn parse_rows(body: &str) -> Vec<Vec<String>> {
    let without_bom: &str = body.strip_prefix('\u{feff}').unwrap();
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(without_bom.as_bytes())
        .records()
        .map(|record| record.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_empty_cell_is_off() {
    assert_eq!(render_cell(&[]), OFF_CELL);
}

#[test]
fn test_cell_with_floor_and_building() {
    let cell: String = render_cell(&[create_test_assignment(ShiftType::Morning, "B1", "F1")]);
    assert_eq!(cell, "Morning(F1-B1)");
}

#[test]
fn test_cell_with_building_only() {
    let assignment: ShiftAssignment =
        ShiftAssignment::at(ShiftType::Afternoon, Building::new("B2"), None);
    assert_eq!(render_cell(&[assignment]), "Afternoon(B2)");
}

#[test]
fn test_cell_without_location_is_bare_label() {
    assert_eq!(render_cell(&[ShiftAssignment::new(ShiftType::Night)]), "Night");
}

#[test]
fn test_same_day_assignments_are_joined() {
    let cell: String = render_cell(&[
        create_test_assignment(ShiftType::Morning, "B1", "F1"),
        create_test_assignment(ShiftType::Afternoon, "B2", "F3"),
    ]);
    assert_eq!(cell, "Morning(F1-B1) + Afternoon(F3-B2)");
}

#[test]
fn test_filename_uses_week_start() {
    assert_eq!(export_filename(&create_test_week()), "roster_2024-06-03.csv");
}

#[test]
fn test_export_starts_with_bom_and_header() {
    let export: RosterExport = export_week(&[], &create_test_week()).unwrap();

    assert!(export.body.starts_with('\u{feff}'));
    assert_eq!(export.content_type, EXPORT_CONTENT_TYPE);
    assert_eq!(export.filename, "roster_2024-06-03.csv");

    let rows: Vec<Vec<String>> = parse_rows(&export.body);
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            "ID",
            "Name",
            "Role",
            "2024-06-03",
            "2024-06-04",
            "2024-06-05",
            "2024-06-06",
            "2024-06-07",
            "2024-06-08",
            "2024-06-09",
        ]
    );
}

#[test]
fn test_export_rows_follow_input_order() {
    let mut worker: StaffMember = create_test_member("S-02", "Smith, Jo", StaffRole::CareWorker);
    worker.set_assignments(
        MONDAY,
        vec![
            create_test_assignment(ShiftType::Morning, "B1", "F1"),
            create_test_assignment(ShiftType::Afternoon, "B2", "F3"),
        ],
    );
    let nurse: StaffMember = create_test_member("S-01", "Ann", StaffRole::Nurse);

    let export: RosterExport = export_week(&[&worker, &nurse], &create_test_week()).unwrap();
    let rows: Vec<Vec<String>> = parse_rows(&export.body);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][0], "S-02");
    assert_eq!(rows[1][1], "Smith, Jo");
    assert_eq!(rows[1][2], "Care Worker");
    assert_eq!(rows[1][3], "Morning(F1-B1) + Afternoon(F3-B2)");
    assert!(rows[1][4..].iter().all(|cell| cell == OFF_CELL));
    assert_eq!(rows[2][0], "S-01");
    assert!(rows[2][3..].iter().all(|cell| cell == OFF_CELL));
}

#[test]
fn test_explicit_day_off_exports_as_off() {
    let mut nurse: StaffMember = create_test_member("S-01", "Ann", StaffRole::Nurse);
    nurse.set_assignments(MONDAY, Vec::new());

    let export: RosterExport = export_week(&[&nurse], &create_test_week()).unwrap();

    assert_eq!(parse_rows(&export.body)[1][3], OFF_CELL);
}
