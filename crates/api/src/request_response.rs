// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use crate::error::ApiError;
use roster::{CellRef, EditorState};
use roster_domain::{
    Building, CoverageThresholds, Date, FilterCriteria, Floor, RoleFilter, ShiftAssignment,
    ShiftType, StaffDraft, StaffId, StaffMember, WeekWindow, parse_iso_date,
};

/// API request to show the week containing a date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectWeekRequest {
    /// Any date within the desired week (`YYYY-MM-DD`).
    pub date: String,
}

impl SelectWeekRequest {
    /// Parses the requested date.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the date is malformed.
    pub fn parse_date(&self) -> Result<Date, ApiError> {
        Ok(parse_iso_date(&self.date)?)
    }
}

/// API request to replace the filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct SetFilterRequest {
    /// `ALL` or a role name/label. Defaults to `ALL`.
    #[serde(default)]
    pub role: Option<String>,
    /// The building, or absent/empty for every building.
    #[serde(default)]
    pub building: Option<String>,
    /// The floor, or absent/empty for every floor. Ignored without a building.
    #[serde(default)]
    pub floor: Option<String>,
}

impl SetFilterRequest {
    /// Converts the request into filter criteria.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the role is unknown.
    pub fn to_criteria(&self) -> Result<FilterCriteria, ApiError> {
        let role: RoleFilter = match self.role.as_deref() {
            None => RoleFilter::All,
            Some(value) => value.parse::<RoleFilter>()?,
        };
        let building: Option<Building> = non_empty(self.building.as_deref()).map(Building::new);
        let floor: Option<Floor> = non_empty(self.floor.as_deref()).map(Floor::new);
        Ok(FilterCriteria::new(role, building, floor))
    }
}

/// API request to create a staff member.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddStaffRequest {
    /// The unique identifier.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The role name or label.
    pub role: String,
}

impl AddStaffRequest {
    /// Converts the request into an unvalidated draft.
    #[must_use]
    pub fn to_draft(&self) -> StaffDraft {
        StaffDraft {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// API request to open the editor on one cell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OpenCellRequest {
    /// The staff member.
    pub staff_id: String,
    /// The date (`YYYY-MM-DD`).
    pub date: String,
}

impl OpenCellRequest {
    /// Parses the staff id and date.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the date is malformed.
    pub fn parse(&self) -> Result<(StaffId, Date), ApiError> {
        Ok((StaffId::new(&self.staff_id), parse_iso_date(&self.date)?))
    }
}

/// API request to change one staging entry.
///
/// Absent fields are left unchanged. An empty building, floor or note clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateEntryRequest {
    /// The new shift type.
    #[serde(default)]
    pub shift_type: Option<String>,
    /// The new building. The floor is reset to the building's first floor.
    #[serde(default)]
    pub building: Option<String>,
    /// The new floor.
    #[serde(default)]
    pub floor: Option<String>,
    /// The new note.
    #[serde(default)]
    pub note: Option<String>,
}

/// API response for an edit mode change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EditModeResponse {
    /// Whether edit mode is now on.
    pub edit_mode: bool,
}

/// API response for a roster reload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReloadResponse {
    /// The number of staff members loaded.
    pub staff_count: usize,
}

/// API response for a staff member addition or removal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StaffChangeResponse {
    /// The staff member added or removed.
    pub staff: StaffMember,
    /// A success message.
    pub message: String,
}

/// One day of a staff member's row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayCellResponse {
    /// The date.
    pub date: Date,
    /// The committed assignments. Empty for a day off.
    pub assignments: Vec<ShiftAssignment>,
}

/// One visible staff member with their week.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StaffMemberResponse {
    /// The identifier.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The role name.
    pub role: String,
    /// The role label.
    pub role_label: String,
    /// One entry per date of the week, ascending.
    pub days: Vec<DayCellResponse>,
}

impl StaffMemberResponse {
    /// Builds the row for `member` within `week`.
    #[must_use]
    pub fn from_member(member: &StaffMember, week: &WeekWindow) -> Self {
        Self {
            id: member.id.value().to_string(),
            name: member.name.clone(),
            role: member.role.as_str().to_string(),
            role_label: member.role.label().to_string(),
            days: week
                .dates()
                .into_iter()
                .map(|date| DayCellResponse {
                    date,
                    assignments: member.assignments_on(date).to_vec(),
                })
                .collect(),
        }
    }
}

/// The editor's observable state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EditorResponse {
    /// Closed, Open or Editing.
    pub state: EditorState,
    /// The open cell.
    pub cell: Option<CellRef>,
    /// The staging list.
    pub staging: Vec<ShiftAssignment>,
    /// The error from the last failed commit.
    pub last_error: Option<String>,
}

/// Coverage counts for one date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoverageDayResponse {
    /// The date.
    pub date: Date,
    /// Morning assignments counted.
    pub morning: u32,
    /// Afternoon assignments counted.
    pub afternoon: u32,
    /// Night assignments counted.
    pub night: u32,
    /// Shifts below their configured minimum.
    pub under_covered: Vec<ShiftType>,
}

/// Coverage counts for the displayed week.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoverageResponse {
    /// One entry per date, ascending.
    pub days: Vec<CoverageDayResponse>,
    /// The minimums used.
    pub thresholds: CoverageThresholds,
}

/// The full roster snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterResponse {
    /// The first date of the displayed week.
    pub week_start: Date,
    /// The dates of the displayed week, ascending.
    pub dates: Vec<Date>,
    /// Whether edit mode is on.
    pub edit_mode: bool,
    /// The active filter.
    pub filter: FilterCriteria,
    /// The visible staff members.
    pub staff: Vec<StaffMemberResponse>,
    /// The editor.
    pub editor: EditorResponse,
    /// Coverage of the visible staff.
    pub coverage: CoverageResponse,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
