// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_core_error, translate_domain_error};
use roster::{CoreError, RepositoryError};
use roster_domain::{Building, DomainError, Floor, StaffId};

#[test]
fn test_duplicate_staff_is_rule_violation() {
    let err: ApiError = translate_domain_error(DomainError::DuplicateStaffId(StaffId::new("S-01")));

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "unique_staff_id"
    ));
}

#[test]
fn test_unknown_staff_is_not_found() {
    let err: ApiError = translate_domain_error(DomainError::StaffNotFound(StaffId::new("X")));

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_floor_outside_building_names_both() {
    let err: ApiError = translate_domain_error(DomainError::FloorNotInBuilding {
        building: Building::new("B1"),
        floor: Floor::new("F3"),
    });

    let message: String = err.to_string();
    assert!(message.contains("F3"));
    assert!(message.contains("B1"));
}

#[test]
fn test_repository_error_is_surfaced_verbatim() {
    let repository_err: RepositoryError = RepositoryError::Unavailable(String::from("offline"));
    let expected: String = repository_err.to_string();

    let err: ApiError = translate_core_error(CoreError::Repository(repository_err));

    assert_eq!(err, ApiError::Repository { message: expected });
}

#[test]
fn test_validation_core_error_uses_domain_translation() {
    let err: ApiError = translate_core_error(CoreError::Validation(DomainError::InvalidName(
        String::from("Name must not be empty"),
    )));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Name must not be empty"),
        }
    );
}
