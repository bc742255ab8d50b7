// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Building, Floor, StaffId};

/// Errors that can occur during domain validation.
///
/// Every variant is detected before any persistence attempt is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Staff name is empty or invalid.
    InvalidName(String),
    /// Staff identifier is empty or invalid.
    InvalidStaffId(String),
    /// Role is not part of the known role set.
    UnknownRole(String),
    /// Shift type is not one of Morning, Afternoon or Night.
    UnknownShiftType(String),
    /// A staff member with this identifier already exists.
    DuplicateStaffId(StaffId),
    /// No staff member with this identifier is held in the roster.
    StaffNotFound(StaffId),
    /// Building is not part of the location hierarchy.
    UnknownBuilding(Building),
    /// An assignment names a floor but no building.
    FloorWithoutBuilding(Floor),
    /// Floor does not belong to the building's floor list.
    FloorNotInBuilding {
        /// The building the floor was checked against.
        building: Building,
        /// The offending floor.
        floor: Floor,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidStaffId(msg) => write!(f, "Invalid staff id: {msg}"),
            Self::UnknownRole(role) => write!(f, "Unknown role '{role}'"),
            Self::UnknownShiftType(shift) => write!(f, "Unknown shift type '{shift}'"),
            Self::DuplicateStaffId(id) => {
                write!(f, "Staff member with id '{id}' already exists")
            }
            Self::StaffNotFound(id) => write!(f, "Staff member '{id}' not found"),
            Self::UnknownBuilding(building) => {
                write!(f, "Building '{building}' is not part of the location hierarchy")
            }
            Self::FloorWithoutBuilding(floor) => {
                write!(f, "Floor '{floor}' is set without a building")
            }
            Self::FloorNotInBuilding { building, floor } => {
                write!(f, "Floor '{floor}' does not belong to building '{building}'")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
