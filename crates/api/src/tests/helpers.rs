// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RosterView;
use roster_domain::{
    Building, BuildingFloors, Date, Floor, LocationHierarchy, RosterConfig, ShiftAssignment,
    ShiftType, StaffId, StaffMember, StaffRecord, StaffRole, WeekWindow, Weekday,
};
use roster_persistence::InMemoryRepository;
use std::sync::Arc;
use time::macros::date;

/// Monday of the test week.
pub const MONDAY: Date = date!(2024 - 06 - 03);

/// A Wednesday inside the test week.
pub const TODAY: Date = date!(2024 - 06 - 05);

pub fn create_test_week() -> WeekWindow {
    WeekWindow::containing(MONDAY, Weekday::Monday).unwrap()
}

pub fn create_test_hierarchy() -> Arc<LocationHierarchy> {
    Arc::new(LocationHierarchy::new(vec![
        BuildingFloors::new("B1", &["F1", "F2"]),
        BuildingFloors::new("B2", &["F3", "F4"]),
    ]))
}

pub fn create_test_assignment(shift: ShiftType, building: &str, floor: &str) -> ShiftAssignment {
    ShiftAssignment::at(shift, Building::new(building), Some(Floor::new(floor)))
}

pub fn create_test_member(id: &str, name: &str, role: StaffRole) -> StaffMember {
    StaffMember::new(StaffId::new(id), String::from(name), role)
}

/// Alice works B1 mornings, Bob works a B2 night, Carol has nothing scheduled.
pub fn create_test_staff() -> Vec<StaffMember> {
    let mut alice: StaffMember = create_test_member("S-01", "Alice", StaffRole::Nurse);
    alice.set_assignments(
        MONDAY,
        vec![create_test_assignment(ShiftType::Morning, "B1", "F1")],
    );
    let mut bob: StaffMember = create_test_member("S-02", "Bob", StaffRole::CareWorker);
    bob.set_assignments(
        MONDAY,
        vec![create_test_assignment(ShiftType::Night, "B2", "F3")],
    );
    let carol: StaffMember = create_test_member("S-03", "Carol", StaffRole::Physician);
    vec![alice, bob, carol]
}

pub fn create_test_repository() -> InMemoryRepository {
    InMemoryRepository::with_records(create_test_staff().iter().map(StaffRecord::from).collect())
}

/// Creates a view over `repository` and loads it.
pub async fn create_loaded_view(repository: &InMemoryRepository) -> RosterView {
    let mut view: RosterView = RosterView::new(
        Arc::new(repository.clone()),
        create_test_hierarchy(),
        RosterConfig::default(),
        TODAY,
    )
    .unwrap();
    view.load().await.unwrap();
    view
}

/// Creates a loaded view with edit mode on.
pub async fn create_editing_view(repository: &InMemoryRepository) -> RosterView {
    let mut view: RosterView = create_loaded_view(repository).await;
    assert!(view.toggle_edit_mode());
    view
}
