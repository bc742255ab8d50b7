// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::{RepositoryError, RosterRepository};
use roster_domain::{
    Date, DomainError, ShiftAssignment, StaffDraft, StaffId, StaffMember, StaffRecord,
    validate_staff_draft,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The single writable copy of the roster.
///
/// Every write goes to the repository first. The in-memory view changes only
/// after the repository acknowledges, so it is never ahead of persisted state.
pub struct RosterStore {
    repository: Arc<dyn RosterRepository>,
    staff: Vec<StaffMember>,
}

impl std::fmt::Debug for RosterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterStore")
            .field("staff", &self.staff)
            .finish_non_exhaustive()
    }
}

impl RosterStore {
    /// Creates an empty store backed by `repository`. Call [`Self::load`] to populate it.
    #[must_use]
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self {
            repository,
            staff: Vec::new(),
        }
    }

    /// Replaces the in-memory roster with the repository's records.
    ///
    /// Stored cells holding a bare assignment are normalized to lists here, so
    /// no other component ever sees the legacy shape.
    ///
    /// # Returns
    ///
    /// The number of staff members loaded.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Repository` if the fetch fails. The previous roster is
    /// kept as-is in that case.
    pub async fn load(&mut self) -> Result<usize, CoreError> {
        let records: Vec<StaffRecord> = match self.repository.get_all().await {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "Roster load failed, keeping previous state");
                return Err(err.into());
            }
        };

        let mut seen: HashSet<StaffId> = HashSet::new();
        let mut staff: Vec<StaffMember> = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id.clone()) {
                warn!(staff_id = %record.id, "Skipping duplicate staff record");
                continue;
            }
            staff.push(record.into_member());
        }

        self.staff = staff;
        info!(staff_count = self.staff.len(), "Roster loaded");
        Ok(self.staff.len())
    }

    /// Replaces the assignment list of one staff member on one date.
    ///
    /// No validation happens here; callers validate before committing. An empty
    /// list is persisted as an explicit day off.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The staff member is not held by the store
    /// - The repository fails to persist the updated record
    pub async fn assign(
        &mut self,
        staff_id: &StaffId,
        date: Date,
        assignments: Vec<ShiftAssignment>,
    ) -> Result<(), CoreError> {
        let index: usize = self.position(staff_id)?;

        let mut updated: StaffMember = self.staff[index].clone();
        let count: usize = assignments.len();
        updated.set_assignments(date, assignments);

        self.persist(&updated).await?;

        self.staff[index] = updated;
        info!(
            staff_id = %staff_id,
            date = %date,
            assignment_count = count,
            "Assignments committed"
        );
        Ok(())
    }

    /// Validates and adds a new staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The draft has an empty id or name, an unknown role, or a duplicate id
    /// - The repository fails to persist the new record
    pub async fn add_staff(&mut self, draft: &StaffDraft) -> Result<StaffMember, CoreError> {
        let member: StaffMember = validate_staff_draft(draft, &self.staff)?;

        self.persist(&member).await?;

        self.staff.push(member.clone());
        info!(staff_id = %member.id, role = %member.role, "Staff member added");
        Ok(member)
    }

    /// Deletes a staff member and every assignment they hold.
    ///
    /// This is irreversible and runs unconditionally; confirmation is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The staff member is not held by the store
    /// - The repository fails to delete the record
    pub async fn remove_staff(&mut self, staff_id: &StaffId) -> Result<StaffMember, CoreError> {
        let index: usize = self.position(staff_id)?;

        if let Err(err) = self.repository.delete(staff_id).await {
            warn!(staff_id = %staff_id, error = %err, "Staff deletion failed");
            return Err(err.into());
        }

        let removed: StaffMember = self.staff.remove(index);
        info!(staff_id = %staff_id, "Staff member removed");
        Ok(removed)
    }

    /// Returns every staff member in store order.
    #[must_use]
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Returns the staff member with `staff_id`, if held.
    #[must_use]
    pub fn get(&self, staff_id: &StaffId) -> Option<&StaffMember> {
        self.staff.iter().find(|member| &member.id == staff_id)
    }

    /// Returns a copy of the committed assignments for one cell.
    ///
    /// Unknown staff members and unscheduled dates both yield an empty list.
    #[must_use]
    pub fn assignments_on(&self, staff_id: &StaffId, date: Date) -> Vec<ShiftAssignment> {
        self.get(staff_id)
            .map(|member| member.assignments_on(date).to_vec())
            .unwrap_or_default()
    }

    fn position(&self, staff_id: &StaffId) -> Result<usize, CoreError> {
        self.staff
            .iter()
            .position(|member| &member.id == staff_id)
            .ok_or_else(|| CoreError::Validation(DomainError::StaffNotFound(staff_id.clone())))
    }

    async fn persist(&self, member: &StaffMember) -> Result<(), RepositoryError> {
        debug!(staff_id = %member.id, "Persisting staff record");
        self.repository.upsert(member).await.inspect_err(|err| {
            warn!(staff_id = %member.id, error = %err, "Persisting staff record failed");
        })
    }
}
