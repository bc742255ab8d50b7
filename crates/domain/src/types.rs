// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::week::WeekWindow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::Date;

/// Represents a staff member identifier.
///
/// Identifiers are trimmed on construction and are unique across the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId {
    value: String,
}

impl StaffId {
    /// Creates a new `StaffId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value (surrounding whitespace is removed)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The fixed set of staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    /// Registered or licensed nurse.
    Nurse,
    /// Care worker providing day-to-day assistance.
    CareWorker,
    /// Physician.
    Physician,
    /// Physical, occupational or speech therapist.
    Therapist,
    /// Administrative staff.
    Administrator,
}

impl StaffRole {
    /// Every known role, in display order.
    pub const ALL: [Self; 5] = [
        Self::Nurse,
        Self::CareWorker,
        Self::Physician,
        Self::Therapist,
        Self::Administrator,
    ];

    /// Converts this role to its machine-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nurse => "Nurse",
            Self::CareWorker => "CareWorker",
            Self::Physician => "Physician",
            Self::Therapist => "Therapist",
            Self::Administrator => "Administrator",
        }
    }

    /// Returns the human-readable label used in exports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nurse => "Nurse",
            Self::CareWorker => "Care Worker",
            Self::Physician => "Physician",
            Self::Therapist => "Therapist",
            Self::Administrator => "Administrator",
        }
    }
}

impl FromStr for StaffRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == trimmed || role.label() == trimmed)
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named time-of-day slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftType {
    /// Morning shift.
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Night shift.
    Night,
}

impl ShiftType {
    /// Every shift type, in chronological order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Night];

    /// Returns the shift label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Night => "Night",
        }
    }
}

impl FromStr for ShiftType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Morning" => Ok(Self::Morning),
            "Afternoon" => Ok(Self::Afternoon),
            "Night" => Ok(Self::Night),
            _ => Err(DomainError::UnknownShiftType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A building reference into the location hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Building {
    name: String,
}

impl Building {
    /// Creates a new `Building` reference.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }

    /// Returns the building name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A floor reference. Floors are only meaningful within a building.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor {
    name: String,
}

impl Floor {
    /// Creates a new `Floor` reference.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }

    /// Returns the floor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single shift placed on a staff member's day.
///
/// A day may hold several assignments, including two of the same shift type
/// (for example a split shift across two buildings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// The shift slot.
    pub shift_type: ShiftType,
    /// The building worked, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<Building>,
    /// The floor worked. Only set together with `building`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<Floor>,
    /// Free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ShiftAssignment {
    /// Creates an assignment with no location and no note.
    #[must_use]
    pub const fn new(shift_type: ShiftType) -> Self {
        Self {
            shift_type,
            building: None,
            floor: None,
            note: None,
        }
    }

    /// Creates an assignment at the given building and optional floor.
    #[must_use]
    pub const fn at(shift_type: ShiftType, building: Building, floor: Option<Floor>) -> Self {
        Self {
            shift_type,
            building: Some(building),
            floor,
            note: None,
        }
    }

    /// Returns whether this assignment references any building or floor.
    #[must_use]
    pub const fn has_location(&self) -> bool {
        self.building.is_some() || self.floor.is_some()
    }

    /// Returns whether this assignment is at `building`.
    #[must_use]
    pub fn is_in_building(&self, building: &Building) -> bool {
        self.building.as_ref() == Some(building)
    }

    /// Returns whether this assignment is on `floor`, regardless of building.
    #[must_use]
    pub fn is_on_floor(&self, floor: &Floor) -> bool {
        self.floor.as_ref() == Some(floor)
    }

    /// Returns whether this assignment satisfies both location criteria at once.
    ///
    /// A `None` criterion matches everything.
    #[must_use]
    pub fn matches_location(&self, building: Option<&Building>, floor: Option<&Floor>) -> bool {
        building.is_none_or(|b| self.is_in_building(b)) && floor.is_none_or(|f| self.is_on_floor(f))
    }
}

/// A staff member and their date-keyed assignments.
///
/// A date mapped to an empty list is a day off; a missing date was never
/// scheduled. Readers treat both the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier.
    pub id: StaffId,
    /// Display name.
    pub name: String,
    /// The staff member's role.
    pub role: StaffRole,
    /// Assignments keyed by calendar date.
    #[serde(default)]
    pub assignments: BTreeMap<Date, Vec<ShiftAssignment>>,
}

impl StaffMember {
    /// Creates a staff member with no assignments.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier
    /// * `name` - The display name
    /// * `role` - The staff role
    #[must_use]
    pub const fn new(id: StaffId, name: String, role: StaffRole) -> Self {
        Self {
            id,
            name,
            role,
            assignments: BTreeMap::new(),
        }
    }

    /// Returns the assignments on `date`, or an empty slice.
    #[must_use]
    pub fn assignments_on(&self, date: Date) -> &[ShiftAssignment] {
        self.assignments.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Replaces the whole assignment list for `date`.
    ///
    /// An empty list is stored as an explicit day off.
    pub fn set_assignments(&mut self, date: Date, assignments: Vec<ShiftAssignment>) {
        self.assignments.insert(date, assignments);
    }

    /// Returns every assignment that falls inside `week`.
    pub fn assignments_within<'a>(
        &'a self,
        week: &WeekWindow,
    ) -> impl Iterator<Item = &'a ShiftAssignment> + 'a {
        self.assignments
            .range(week.start()..=week.end())
            .flat_map(|(_, list)| list.iter())
    }
}

/// A stored per-day value as found in the repository.
///
/// Older records hold a bare assignment instead of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssignmentCell {
    /// A list of assignments (the current shape).
    Many(Vec<ShiftAssignment>),
    /// A single bare assignment (legacy shape).
    Single(ShiftAssignment),
}

impl AssignmentCell {
    /// Normalizes this cell into a list.
    #[must_use]
    pub fn into_list(self) -> Vec<ShiftAssignment> {
        match self {
            Self::Many(list) => list,
            Self::Single(assignment) => vec![assignment],
        }
    }
}

/// A staff member exactly as persisted by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// Unique identifier.
    pub id: StaffId,
    /// Display name.
    pub name: String,
    /// The staff member's role.
    pub role: StaffRole,
    /// Stored cells keyed by calendar date.
    #[serde(default)]
    pub assignments: BTreeMap<Date, AssignmentCell>,
}

impl StaffRecord {
    /// Converts a stored record into a `StaffMember`, normalizing every cell to a list.
    #[must_use]
    pub fn into_member(self) -> StaffMember {
        StaffMember {
            id: self.id,
            name: self.name,
            role: self.role,
            assignments: self
                .assignments
                .into_iter()
                .map(|(date, cell)| (date, cell.into_list()))
                .collect(),
        }
    }
}

impl From<&StaffMember> for StaffRecord {
    fn from(member: &StaffMember) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            role: member.role,
            assignments: member
                .assignments
                .iter()
                .map(|(date, list)| (*date, AssignmentCell::Many(list.clone())))
                .collect(),
        }
    }
}

/// Unvalidated input for creating a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffDraft {
    /// The requested identifier.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The role name or label.
    pub role: String,
}
