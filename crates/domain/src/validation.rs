// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{StaffDraft, StaffId, StaffMember, StaffRole};

/// Validates a staff draft and builds the staff member it describes.
///
/// # Arguments
///
/// * `draft` - The unvalidated input
/// * `existing` - Every staff member currently on the roster
///
/// # Returns
///
/// * `Ok(StaffMember)` with no assignments if the draft is valid
/// * `Err(DomainError)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The id is empty
/// - The name is empty
/// - The role is not in the known role set
/// - The id is already used by another staff member
pub fn validate_staff_draft(
    draft: &StaffDraft,
    existing: &[StaffMember],
) -> Result<StaffMember, DomainError> {
    let id: StaffId = StaffId::new(&draft.id);
    if id.value().is_empty() {
        return Err(DomainError::InvalidStaffId(String::from(
            "Staff id cannot be empty",
        )));
    }

    let name: &str = draft.name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    let role: StaffRole = draft.role.parse()?;

    validate_staff_id_unique(&id, existing)?;

    Ok(StaffMember::new(id, name.to_string(), role))
}

/// Validates that no existing staff member uses `id`.
///
/// # Errors
///
/// Returns `DomainError::DuplicateStaffId` if the id is taken.
pub fn validate_staff_id_unique(id: &StaffId, existing: &[StaffMember]) -> Result<(), DomainError> {
    if existing.iter().any(|member| &member.id == id) {
        return Err(DomainError::DuplicateStaffId(id.clone()));
    }
    Ok(())
}
