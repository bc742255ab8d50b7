// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::location::LocationHierarchy;
use crate::types::{Building, Floor, StaffRole};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role component of a filter: every role, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoleFilter {
    /// Every role passes.
    #[default]
    All,
    /// Only the given role passes.
    Only(StaffRole),
}

impl RoleFilter {
    /// The wire value selecting every role.
    pub const ALL_VALUE: &'static str = "ALL";

    /// Returns whether `role` passes this filter.
    #[must_use]
    pub fn admits(&self, role: StaffRole) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == role,
        }
    }
}

impl FromStr for RoleFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_VALUE) {
            return Ok(Self::All);
        }
        s.parse::<StaffRole>().map(Self::Only)
    }
}

/// Criteria selecting the visible part of the roster.
///
/// A floor is only meaningful together with a building; it is dropped when the
/// building is cleared or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    role: RoleFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    building: Option<Building>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    floor: Option<Floor>,
}

impl FilterCriteria {
    /// Creates criteria. A floor without a building is discarded.
    #[must_use]
    pub fn new(role: RoleFilter, building: Option<Building>, floor: Option<Floor>) -> Self {
        let floor: Option<Floor> = if building.is_some() { floor } else { None };
        Self {
            role,
            building,
            floor,
        }
    }

    /// Returns the role filter.
    #[must_use]
    pub const fn role(&self) -> RoleFilter {
        self.role
    }

    /// Returns the selected building, if any.
    #[must_use]
    pub const fn building(&self) -> Option<&Building> {
        self.building.as_ref()
    }

    /// Returns the selected floor. Always `None` when no building is selected.
    #[must_use]
    pub fn floor(&self) -> Option<&Floor> {
        self.building.as_ref().and(self.floor.as_ref())
    }

    /// Returns whether any location criterion is active.
    #[must_use]
    pub const fn has_location(&self) -> bool {
        self.building.is_some()
    }

    /// Returns a copy with a different role filter.
    #[must_use]
    pub fn with_role(mut self, role: RoleFilter) -> Self {
        self.role = role;
        self
    }

    /// Returns a copy with a different building. The floor is cleared.
    #[must_use]
    pub fn with_building(mut self, building: Option<Building>) -> Self {
        self.building = building;
        self.floor = None;
        self
    }

    /// Returns a copy with a different floor. Ignored when no building is selected.
    #[must_use]
    pub fn with_floor(mut self, floor: Option<Floor>) -> Self {
        if self.building.is_some() {
            self.floor = floor;
        }
        self
    }

    /// Validates the location criteria against the hierarchy.
    ///
    /// # Errors
    ///
    /// Returns an error if the building is unknown or the floor does not belong to it.
    pub fn validate(&self, hierarchy: &LocationHierarchy) -> Result<(), DomainError> {
        hierarchy.validate_location(self.building(), self.floor())
    }
}
