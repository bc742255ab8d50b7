// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster::RepositoryError;
use roster_domain::{StaffId, StaffMember, StaffRecord};

/// Inserts or replaces the record for `member.id`, keeping the original position.
pub fn upsert_record(records: &mut Vec<StaffRecord>, member: &StaffMember) {
    let record: StaffRecord = StaffRecord::from(member);
    match records.iter_mut().find(|existing| existing.id == record.id) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

/// Removes the record for `staff_id`.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no record has that id.
pub fn delete_record(
    records: &mut Vec<StaffRecord>,
    staff_id: &StaffId,
) -> Result<StaffRecord, RepositoryError> {
    let index: usize = records
        .iter()
        .position(|record| &record.id == staff_id)
        .ok_or_else(|| RepositoryError::NotFound(staff_id.clone()))?;
    Ok(records.remove(index))
}
