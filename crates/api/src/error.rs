// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use roster::{CoreError, RepositoryError};
use roster_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The repository failed. The roster shown is unchanged.
    Repository {
        /// The repository's error, verbatim.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Repository { message } => {
                write!(f, "Repository failure: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors raised while rendering the CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The writer could not hand back its buffer.
    #[error("Failed to flush CSV output: {0}")]
    Flush(String),

    /// The rendered bytes were not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidStaffId(msg) => ApiError::InvalidInput {
            field: String::from("id"),
            message: msg,
        },
        DomainError::UnknownRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role '{role}'"),
        },
        DomainError::UnknownShiftType(shift) => ApiError::InvalidInput {
            field: String::from("shift_type"),
            message: format!("Unknown shift type '{shift}'"),
        },
        DomainError::DuplicateStaffId(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_staff_id"),
            message: format!("Staff member with id '{id}' already exists"),
        },
        DomainError::StaffNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Staff member"),
            message: format!("Staff member '{id}' does not exist"),
        },
        DomainError::UnknownBuilding(building) => ApiError::InvalidInput {
            field: String::from("building"),
            message: format!("Building '{building}' is not part of the location hierarchy"),
        },
        DomainError::FloorWithoutBuilding(floor) => ApiError::DomainRuleViolation {
            rule: String::from("floor_requires_building"),
            message: format!("Floor '{floor}' is set without a building"),
        },
        DomainError::FloorNotInBuilding { building, floor } => ApiError::DomainRuleViolation {
            rule: String::from("floor_belongs_to_building"),
            message: format!("Floor '{floor}' does not belong to building '{building}'"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Validation(domain_err) => translate_domain_error(domain_err),
        CoreError::Repository(repository_err) => translate_repository_error(&repository_err),
    }
}

fn translate_repository_error(err: &RepositoryError) -> ApiError {
    ApiError::Repository {
        message: err.to_string(),
    }
}
