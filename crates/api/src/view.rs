// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The presentation-facing roster session.
//!
//! A [`RosterView`] ties the store, the editor and the current week/filter
//! selection together. Everything a front end needs goes through it.

use crate::error::ApiError;
use crate::export::{RosterExport, export_week};
use crate::request_response::{
    CoverageDayResponse, CoverageResponse, EditorResponse, RosterResponse, StaffMemberResponse,
    UpdateEntryRequest,
};
use roster::{
    CoverageReport, EditorState, RosterRepository, RosterStore, ShiftEditor, compute_coverage,
    filter_staff,
};
use roster_domain::{
    Building, Date, FilterCriteria, Floor, LocationHierarchy, RosterConfig, ShiftType,
    StaffDraft, StaffId, StaffMember, WeekWindow, format_iso_date,
};
use std::sync::Arc;
use tracing::{debug, info};

/// One user's view of the roster.
#[derive(Debug)]
pub struct RosterView {
    store: RosterStore,
    editor: ShiftEditor,
    hierarchy: Arc<LocationHierarchy>,
    config: RosterConfig,
    week: WeekWindow,
    filter: FilterCriteria,
}

impl RosterView {
    /// Creates a view showing the week containing `today`, with no filter.
    ///
    /// The roster is empty until [`Self::load`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the week containing `today` is not representable.
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        hierarchy: Arc<LocationHierarchy>,
        config: RosterConfig,
        today: Date,
    ) -> Result<Self, ApiError> {
        let week: WeekWindow = WeekWindow::containing(today, config.week_start)?;
        Ok(Self {
            store: RosterStore::new(repository),
            editor: ShiftEditor::new(Arc::clone(&hierarchy)),
            hierarchy,
            config,
            week,
            filter: FilterCriteria::default(),
        })
    }

    /// Reloads the roster from the repository.
    ///
    /// An open editor is discarded since its committed baseline may have changed.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Repository` if the fetch fails; the previous roster stays visible.
    pub async fn load(&mut self) -> Result<usize, ApiError> {
        let count: usize = self.store.load().await?;
        self.editor.cancel();
        Ok(count)
    }

    /// Shows the week containing `date`. Navigating away discards any open cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the week is not representable.
    pub fn select_week(&mut self, date: Date) -> Result<WeekWindow, ApiError> {
        let week: WeekWindow = WeekWindow::containing(date, self.config.week_start)?;
        if week != self.week {
            self.editor.cancel();
            self.week = week;
            debug!(week_start = %format_iso_date(week.start()), "Week selected");
        }
        Ok(self.week)
    }

    /// Replaces the filter criteria.
    ///
    /// # Errors
    ///
    /// Returns an error if the building is unknown or the floor is not part of it.
    /// The previous criteria stay in force in that case.
    pub fn set_filter(&mut self, criteria: FilterCriteria) -> Result<(), ApiError> {
        criteria.validate(&self.hierarchy)?;
        debug!(?criteria, "Filter updated");
        self.filter = criteria;
        Ok(())
    }

    /// Flips edit mode and returns the new value.
    pub fn toggle_edit_mode(&mut self) -> bool {
        let enabled: bool = self.editor.toggle_edit_mode();
        info!(edit_mode = enabled, "Edit mode toggled");
        enabled
    }

    /// Returns the displayed week.
    #[must_use]
    pub const fn week(&self) -> WeekWindow {
        self.week
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the location hierarchy.
    #[must_use]
    pub fn hierarchy(&self) -> &LocationHierarchy {
        &self.hierarchy
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &ShiftEditor {
        &self.editor
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Returns the staff members passing the filter in the displayed week.
    #[must_use]
    pub fn visible_staff(&self) -> Vec<&StaffMember> {
        filter_staff(self.store.staff(), &self.filter, &self.week)
    }

    /// Returns coverage counts for the displayed week.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        compute_coverage(
            &self.visible_staff(),
            &self.filter,
            &self.week,
            self.config.thresholds,
        )
    }

    /// Renders the visible week as CSV.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if rendering fails.
    pub fn export(&self) -> Result<RosterExport, ApiError> {
        let export: RosterExport = export_week(&self.visible_staff(), &self.week)?;
        info!(filename = %export.filename, "Roster exported");
        Ok(export)
    }

    /// Adds a staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or the repository fails.
    pub async fn add_staff(&mut self, draft: &StaffDraft) -> Result<StaffMember, ApiError> {
        Ok(self.store.add_staff(draft).await?)
    }

    /// Removes a staff member and all their assignments.
    ///
    /// Confirmation is the caller's responsibility. An editor open on this
    /// staff member is discarded once the removal succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member is unknown or the repository fails.
    pub async fn remove_staff(&mut self, staff_id: &StaffId) -> Result<StaffMember, ApiError> {
        let removed: StaffMember = self.store.remove_staff(staff_id).await?;
        if self
            .editor
            .cell()
            .is_some_and(|cell| &cell.staff_id == staff_id)
        {
            self.editor.cancel();
        }
        Ok(removed)
    }

    /// Opens the editor on one cell.
    ///
    /// # Returns
    ///
    /// `true` if the cell is open afterwards, `false` when edit mode is off.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if edit mode is on and the staff
    /// member is unknown.
    pub fn open_cell(&mut self, staff_id: &StaffId, date: Date) -> Result<bool, ApiError> {
        if !self.editor.is_edit_mode() {
            return Ok(false);
        }
        if self.store.get(staff_id).is_none() {
            return Err(ApiError::ResourceNotFound {
                resource_type: String::from("Staff member"),
                message: format!("Staff member '{staff_id}' does not exist"),
            });
        }
        Ok(self.editor.open(&self.store, staff_id, date))
    }

    /// Appends a Morning entry, defaulting to the filter's building.
    pub fn add_entry(&mut self) {
        let default_building: Option<Building> = self.filter.building().cloned();
        self.editor.add_entry(default_building.as_ref());
    }

    /// Removes staging entry `index`.
    pub fn remove_entry(&mut self, index: usize) {
        self.editor.remove_entry(index);
    }

    /// Sets the shift type of staging entry `index`.
    pub fn set_shift_type(&mut self, index: usize, shift_type: ShiftType) {
        self.editor.set_shift_type(index, shift_type);
    }

    /// Sets the building of staging entry `index`; the floor follows.
    pub fn set_building(&mut self, index: usize, building: Option<Building>) {
        self.editor.set_building(index, building);
    }

    /// Sets the floor of staging entry `index`.
    pub fn set_floor(&mut self, index: usize, floor: Option<Floor>) {
        self.editor.set_floor(index, floor);
    }

    /// Sets the note of staging entry `index`.
    pub fn set_note(&mut self, index: usize, note: Option<String>) {
        self.editor.set_note(index, note);
    }

    /// Applies a partial update to staging entry `index`.
    ///
    /// Fields are applied in order: shift type, building, floor, note. A
    /// building change resets the floor before an explicit floor is applied.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the shift type is unknown. Nothing is
    /// changed in that case.
    pub fn update_entry(&mut self, index: usize, update: &UpdateEntryRequest) -> Result<(), ApiError> {
        let shift_type: Option<ShiftType> = update
            .shift_type
            .as_deref()
            .map(str::parse::<ShiftType>)
            .transpose()?;

        if let Some(shift_type) = shift_type {
            self.set_shift_type(index, shift_type);
        }
        if let Some(building) = &update.building {
            self.set_building(index, Some(Building::new(building)));
        }
        if let Some(floor) = &update.floor {
            self.set_floor(index, Some(Floor::new(floor)));
        }
        if let Some(note) = &update.note {
            self.set_note(index, Some(note.clone()));
        }
        Ok(())
    }

    /// Commits the open cell.
    ///
    /// # Returns
    ///
    /// `true` if a cell was committed, `false` when nothing was open.
    ///
    /// # Errors
    ///
    /// Returns an error if validation or the repository write fails. The editor
    /// stays open with its staging intact.
    pub async fn commit(&mut self) -> Result<bool, ApiError> {
        Ok(self.editor.commit(&mut self.store).await?)
    }

    /// Discards the open cell.
    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    /// Returns the editor state.
    #[must_use]
    pub const fn editor_state(&self) -> EditorState {
        self.editor.state()
    }

    /// Builds the full snapshot served to front ends.
    #[must_use]
    pub fn snapshot(&self) -> RosterResponse {
        RosterResponse {
            week_start: self.week.start(),
            dates: self.week.dates(),
            edit_mode: self.editor.is_edit_mode(),
            filter: self.filter.clone(),
            staff: self
                .visible_staff()
                .into_iter()
                .map(|member| StaffMemberResponse::from_member(member, &self.week))
                .collect(),
            editor: self.editor_snapshot(),
            coverage: self.coverage_snapshot(),
        }
    }

    /// Builds the editor part of the snapshot.
    #[must_use]
    pub fn editor_snapshot(&self) -> EditorResponse {
        EditorResponse {
            state: self.editor.state(),
            cell: self.editor.cell().cloned(),
            staging: self.editor.staging().to_vec(),
            last_error: self
                .editor
                .last_error()
                .map(|err| crate::error::translate_core_error(err.clone()).to_string()),
        }
    }

    /// Builds the coverage part of the snapshot.
    #[must_use]
    pub fn coverage_snapshot(&self) -> CoverageResponse {
        let report: CoverageReport = self.coverage();
        CoverageResponse {
            days: report
                .days
                .iter()
                .map(|day| CoverageDayResponse {
                    date: day.date,
                    morning: day.morning,
                    afternoon: day.afternoon,
                    night: day.night,
                    under_covered: day.under_covered(&report.thresholds),
                })
                .collect(),
            thresholds: report.thresholds,
        }
    }
}
