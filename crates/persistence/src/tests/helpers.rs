// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{
    Building, Floor, ShiftAssignment, ShiftType, StaffId, StaffMember, StaffRole,
};
use std::path::PathBuf;
use tempfile::TempDir;
use time::macros::date;

/// Returns a temporary directory and a not-yet-created roster file inside it.
///
/// The directory is removed when the returned guard is dropped.
pub fn create_test_file() -> (TempDir, PathBuf) {
    let temp: TempDir = TempDir::new().unwrap();
    let path: PathBuf = temp.path().join("roster.json");
    (temp, path)
}

pub fn create_test_member(id: &str, name: &str) -> StaffMember {
    let mut member: StaffMember =
        StaffMember::new(StaffId::new(id), String::from(name), StaffRole::Nurse);
    member.set_assignments(
        date!(2024 - 06 - 03),
        vec![ShiftAssignment::at(
            ShiftType::Morning,
            Building::new("B1"),
            Some(Floor::new("F1")),
        )],
    );
    member
}
