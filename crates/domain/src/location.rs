// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Building, Floor, ShiftAssignment};
use serde::{Deserialize, Serialize};

/// A building and its ordered floor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingFloors {
    /// The building.
    pub building: Building,
    /// Floors in display order. The first entry is the default floor.
    pub floors: Vec<Floor>,
}

impl BuildingFloors {
    /// Creates a building entry from plain names.
    #[must_use]
    pub fn new(building: &str, floors: &[&str]) -> Self {
        Self {
            building: Building::new(building),
            floors: floors.iter().map(|f| Floor::new(f)).collect(),
        }
    }
}

/// Static building → floor reference data.
///
/// Read-only once constructed. Used to validate floors and to cascade the
/// default floor when an assignment's building changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationHierarchy {
    buildings: Vec<BuildingFloors>,
}

impl LocationHierarchy {
    /// Creates a hierarchy from an ordered building list.
    #[must_use]
    pub const fn new(buildings: Vec<BuildingFloors>) -> Self {
        Self { buildings }
    }

    /// Returns all buildings in order.
    #[must_use]
    pub fn buildings(&self) -> &[BuildingFloors] {
        &self.buildings
    }

    /// Returns the floors of `building`, or an empty slice for an unknown building.
    #[must_use]
    pub fn floors_of(&self, building: &Building) -> &[Floor] {
        self.buildings
            .iter()
            .find(|entry| &entry.building == building)
            .map_or(&[], |entry| entry.floors.as_slice())
    }

    /// Returns the default floor of `building`.
    #[must_use]
    pub fn first_floor(&self, building: &Building) -> Option<&Floor> {
        self.floors_of(building).first()
    }

    /// Returns whether `building` is known.
    #[must_use]
    pub fn contains_building(&self, building: &Building) -> bool {
        self.buildings.iter().any(|entry| &entry.building == building)
    }

    /// Returns whether `floor` belongs to `building`.
    #[must_use]
    pub fn contains_floor(&self, building: &Building, floor: &Floor) -> bool {
        self.floors_of(building).contains(floor)
    }

    /// Validates a building/floor pair against the hierarchy.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A floor is given without a building
    /// - The building is not part of the hierarchy
    /// - The floor does not belong to the building
    pub fn validate_location(
        &self,
        building: Option<&Building>,
        floor: Option<&Floor>,
    ) -> Result<(), DomainError> {
        match (building, floor) {
            (None, None) => Ok(()),
            (None, Some(floor)) => Err(DomainError::FloorWithoutBuilding(floor.clone())),
            (Some(building), _) if !self.contains_building(building) => {
                Err(DomainError::UnknownBuilding(building.clone()))
            }
            (Some(building), Some(floor)) if !self.contains_floor(building, floor) => {
                Err(DomainError::FloorNotInBuilding {
                    building: building.clone(),
                    floor: floor.clone(),
                })
            }
            (Some(_), _) => Ok(()),
        }
    }

    /// Validates every assignment of a day's list.
    ///
    /// # Errors
    ///
    /// Returns the first location error found.
    pub fn validate_assignments(&self, assignments: &[ShiftAssignment]) -> Result<(), DomainError> {
        for assignment in assignments {
            self.validate_location(assignment.building.as_ref(), assignment.floor.as_ref())?;
        }
        Ok(())
    }
}
