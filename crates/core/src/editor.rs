// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-cell editing of a staff member's day.
//!
//! A [`ShiftEditor`] owns at most one edit session, so at most one cell can be
//! open at a time. Opening another cell discards the current staging without
//! committing it.
//!
//! ```text
//! Closed --open--> Open --mutate--> Editing
//!   ^               |                  |
//!   +----cancel-----+------------------+
//!   +----commit ok--+------------------+
//! ```
//!
//! A failed commit leaves the editor in `Editing` with the error retained.

use crate::error::CoreError;
use crate::store::RosterStore;
use roster_domain::{
    Building, Date, Floor, LocationHierarchy, ShiftAssignment, ShiftType, StaffId,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Identifies one staff/date cell of the roster grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// The staff member.
    pub staff_id: StaffId,
    /// The date.
    pub date: Date,
}

/// Observable state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorState {
    /// No cell is open.
    Closed,
    /// A cell is open and its staging equals the committed list.
    Open,
    /// A cell is open and its staging has been changed.
    Editing,
}

#[derive(Debug, Clone)]
struct EditSession {
    cell: CellRef,
    staging: Vec<ShiftAssignment>,
    dirty: bool,
    last_error: Option<CoreError>,
}

/// Stages and commits changes to one cell at a time.
///
/// Editing operations are no-ops while edit mode is off.
#[derive(Debug, Clone)]
pub struct ShiftEditor {
    hierarchy: Arc<LocationHierarchy>,
    edit_mode: bool,
    session: Option<EditSession>,
}

impl ShiftEditor {
    /// Creates a closed editor with edit mode off.
    #[must_use]
    pub const fn new(hierarchy: Arc<LocationHierarchy>) -> Self {
        Self {
            hierarchy,
            edit_mode: false,
            session: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> EditorState {
        match &self.session {
            None => EditorState::Closed,
            Some(session) if session.dirty => EditorState::Editing,
            Some(_) => EditorState::Open,
        }
    }

    /// Returns whether edit mode is on.
    #[must_use]
    pub const fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Turns edit mode on or off. Turning it off discards any open cell.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if !enabled {
            self.cancel();
        }
        self.edit_mode = enabled;
    }

    /// Flips edit mode and returns the new value.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.set_edit_mode(!self.edit_mode);
        self.edit_mode
    }

    /// Returns the open cell, if any.
    #[must_use]
    pub fn cell(&self) -> Option<&CellRef> {
        self.session.as_ref().map(|session| &session.cell)
    }

    /// Returns the staging list. Empty when closed.
    #[must_use]
    pub fn staging(&self) -> &[ShiftAssignment] {
        self.session
            .as_ref()
            .map_or(&[], |session| session.staging.as_slice())
    }

    /// Returns the error from the last failed commit of the open cell.
    #[must_use]
    pub fn last_error(&self) -> Option<&CoreError> {
        self.session
            .as_ref()
            .and_then(|session| session.last_error.as_ref())
    }

    /// Opens the cell for `staff_id` on `date`, staging a copy of its committed list.
    ///
    /// Any other open cell is discarded first. Re-opening the cell that is
    /// already open keeps its staging.
    ///
    /// # Returns
    ///
    /// `true` if the cell is open afterwards; `false` when edit mode is off or
    /// the staff member is unknown.
    pub fn open(&mut self, store: &RosterStore, staff_id: &StaffId, date: Date) -> bool {
        if !self.edit_mode {
            debug!("Ignoring open while edit mode is off");
            return false;
        }

        let cell: CellRef = CellRef {
            staff_id: staff_id.clone(),
            date,
        };
        if self.cell() == Some(&cell) {
            return true;
        }

        if store.get(staff_id).is_none() {
            debug!(staff_id = %staff_id, "Ignoring open for unknown staff member");
            return false;
        }

        self.cancel();
        debug!(staff_id = %staff_id, date = %date, "Editor opened");
        self.session = Some(EditSession {
            cell,
            staging: store.assignments_on(staff_id, date),
            dirty: false,
            last_error: None,
        });
        true
    }

    /// Appends a Morning entry, placed in `default_building` when one is given.
    ///
    /// The floor always starts empty.
    pub fn add_entry(&mut self, default_building: Option<&Building>) {
        if let Some(session) = self.active_session() {
            session.staging.push(ShiftAssignment {
                shift_type: ShiftType::Morning,
                building: default_building.cloned(),
                floor: None,
                note: None,
            });
            session.dirty = true;
        }
    }

    /// Deletes staging entry `index`.
    pub fn remove_entry(&mut self, index: usize) {
        if let Some(session) = self.active_session() {
            if index < session.staging.len() {
                session.staging.remove(index);
                session.dirty = true;
            } else {
                debug!(index, "Ignoring removal of a missing staging entry");
            }
        }
    }

    /// Sets the shift type of entry `index`.
    pub fn set_shift_type(&mut self, index: usize, shift_type: ShiftType) {
        self.update_entry(index, |entry, _| {
            entry.shift_type = shift_type;
        });
    }

    /// Sets the building of entry `index`.
    ///
    /// The floor always follows: it becomes the building's first floor, or empty
    /// when the building is cleared. An empty building name clears the building.
    pub fn set_building(&mut self, index: usize, building: Option<Building>) {
        let building: Option<Building> = building.filter(|b| !b.name().is_empty());
        self.update_entry(index, |entry, hierarchy| {
            entry.floor = building
                .as_ref()
                .and_then(|b| hierarchy.first_floor(b))
                .cloned();
            entry.building = building;
        });
    }

    /// Sets the floor of entry `index`. Ignored when the entry has no building.
    pub fn set_floor(&mut self, index: usize, floor: Option<Floor>) {
        let floor: Option<Floor> = floor.filter(|f| !f.name().is_empty());
        self.update_entry(index, |entry, _| {
            if entry.building.is_some() {
                entry.floor = floor;
            } else {
                debug!("Ignoring floor change on an entry without a building");
            }
        });
    }

    /// Sets the note of entry `index`. An empty note clears it.
    pub fn set_note(&mut self, index: usize, note: Option<String>) {
        let note: Option<String> = note.filter(|n| !n.trim().is_empty());
        self.update_entry(index, |entry, _| {
            entry.note = note;
        });
    }

    /// Validates the staging list and writes it through `store`.
    ///
    /// Closes the editor on success. Committing an empty staging list records an
    /// explicit day off.
    ///
    /// # Returns
    ///
    /// `true` if a cell was committed; `false` when edit mode is off or no cell
    /// is open.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An entry has a floor without a building, an unknown building, or a
    ///   floor outside its building
    /// - The store rejects the write
    ///
    /// The editor stays in `Editing` and keeps the error in both cases.
    pub async fn commit(&mut self, store: &mut RosterStore) -> Result<bool, CoreError> {
        if !self.edit_mode {
            debug!("Ignoring commit while edit mode is off");
            return Ok(false);
        }
        let Some(session) = self.session.as_mut() else {
            debug!("Ignoring commit with no open cell");
            return Ok(false);
        };

        let cell: CellRef = session.cell.clone();
        let staging: Vec<ShiftAssignment> = session.staging.clone();

        let result: Result<(), CoreError> = match self.hierarchy.validate_assignments(&staging) {
            Ok(()) => store.assign(&cell.staff_id, cell.date, staging).await,
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(()) => {
                debug!(staff_id = %cell.staff_id, date = %cell.date, "Editor committed");
                self.session = None;
                Ok(true)
            }
            Err(err) => {
                if let Some(session) = self.session.as_mut() {
                    session.dirty = true;
                    session.last_error = Some(err.clone());
                }
                Err(err)
            }
        }
    }

    /// Discards the staging list and closes the editor.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(
                staff_id = %session.cell.staff_id,
                date = %session.cell.date,
                discarded_changes = session.dirty,
                "Editor cancelled"
            );
        }
    }

    fn active_session(&mut self) -> Option<&mut EditSession> {
        if self.edit_mode {
            self.session.as_mut()
        } else {
            None
        }
    }

    fn update_entry<F>(&mut self, index: usize, change: F)
    where
        F: FnOnce(&mut ShiftAssignment, &LocationHierarchy),
    {
        let hierarchy: Arc<LocationHierarchy> = Arc::clone(&self.hierarchy);
        if let Some(session) = self.active_session() {
            if let Some(entry) = session.staging.get_mut(index) {
                let before: ShiftAssignment = entry.clone();
                change(entry, &hierarchy);
                if *entry != before {
                    session.dirty = true;
                }
            } else {
                debug!(index, "Ignoring edit of a missing staging entry");
            }
        }
    }
}
