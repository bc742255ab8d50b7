// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RepositoryError, RosterRepository, RosterStore};
use async_trait::async_trait;
use roster_domain::{
    AssignmentCell, Building, BuildingFloors, Date, Floor, LocationHierarchy, ShiftAssignment,
    ShiftType, StaffId, StaffMember, StaffRecord, StaffRole, WeekWindow, Weekday,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory repository with switchable failures.
///
/// Clones share state, so a test can keep a handle after giving one to the store.
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    inner: Arc<Mutex<MockRepositoryInner>>,
}

#[derive(Debug, Default)]
struct MockRepositoryInner {
    records: Vec<StaffRecord>,
    fail_get_all: bool,
    fail_upsert: bool,
    fail_delete: bool,
    upsert_calls: Vec<StaffMember>,
    delete_calls: Vec<StaffId>,
}

impl MockRepository {
    pub fn with_records(records: Vec<StaffRecord>) -> Self {
        let repository: Self = Self::default();
        repository.inner.lock().unwrap().records = records;
        repository
    }

    pub fn with_members(members: &[StaffMember]) -> Self {
        Self::with_records(members.iter().map(StaffRecord::from).collect())
    }

    pub fn set_fail_get_all(&self, fail: bool) {
        self.inner.lock().unwrap().fail_get_all = fail;
    }

    pub fn set_fail_upsert(&self, fail: bool) {
        self.inner.lock().unwrap().fail_upsert = fail;
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.inner.lock().unwrap().fail_delete = fail;
    }

    pub fn upsert_calls(&self) -> Vec<StaffMember> {
        self.inner.lock().unwrap().upsert_calls.clone()
    }

    pub fn delete_calls(&self) -> Vec<StaffId> {
        self.inner.lock().unwrap().delete_calls.clone()
    }

    pub fn record(&self, staff_id: &StaffId) -> Option<StaffRecord> {
        self.inner
            .lock()
            .unwrap()
            .records
            .iter()
            .find(|record| &record.id == staff_id)
            .cloned()
    }
}

#[async_trait]
impl RosterRepository for MockRepository {
    async fn get_all(&self) -> Result<Vec<StaffRecord>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_get_all {
            return Err(RepositoryError::Unavailable(String::from("mock offline")));
        }
        Ok(inner.records.clone())
    }

    async fn upsert(&self, staff: &StaffMember) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.upsert_calls.push(staff.clone());
        if inner.fail_upsert {
            return Err(RepositoryError::Storage(String::from("mock write failure")));
        }
        let record: StaffRecord = StaffRecord::from(staff);
        match inner.records.iter_mut().find(|r| r.id == staff.id) {
            Some(existing) => *existing = record,
            None => inner.records.push(record),
        }
        Ok(())
    }

    async fn delete(&self, staff_id: &StaffId) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.delete_calls.push(staff_id.clone());
        if inner.fail_delete {
            return Err(RepositoryError::Storage(String::from("mock delete failure")));
        }
        inner.records.retain(|record| &record.id != staff_id);
        Ok(())
    }
}

pub fn monday() -> Date {
    time::macros::date!(2024 - 06 - 03)
}

pub fn day(offset: i64) -> Date {
    monday() + time::Duration::days(offset)
}

pub fn test_week() -> WeekWindow {
    WeekWindow::containing(monday(), Weekday::Monday).unwrap()
}

pub fn test_hierarchy() -> Arc<LocationHierarchy> {
    Arc::new(LocationHierarchy::new(vec![
        BuildingFloors::new("B1", &["F1", "F2"]),
        BuildingFloors::new("B2", &["F3", "F4"]),
    ]))
}

pub fn member(id: &str, name: &str, role: StaffRole) -> StaffMember {
    StaffMember::new(StaffId::new(id), String::from(name), role)
}

pub fn at(shift: ShiftType, building: &str, floor: &str) -> ShiftAssignment {
    ShiftAssignment::at(shift, Building::new(building), Some(Floor::new(floor)))
}

/// Staff member whose 2024-06-03 holds a bare assignment in storage.
pub fn legacy_record() -> StaffRecord {
    let mut assignments: BTreeMap<Date, AssignmentCell> = BTreeMap::new();
    assignments.insert(
        monday(),
        AssignmentCell::Single(at(ShiftType::Night, "B1", "F2")),
    );
    StaffRecord {
        id: StaffId::new("L-01"),
        name: String::from("Legacy Lee"),
        role: StaffRole::CareWorker,
        assignments,
    }
}

pub async fn loaded_store(repository: &MockRepository) -> RosterStore {
    let mut store: RosterStore = RosterStore::new(Arc::new(repository.clone()));
    store.load().await.unwrap();
    store
}
