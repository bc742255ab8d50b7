// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod export;
mod request_response;
mod view;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ExportError, translate_core_error, translate_domain_error};
pub use export::{
    ASSIGNMENT_SEPARATOR, EXPORT_CONTENT_TYPE, OFF_CELL, RosterExport, export_filename,
    export_week, render_cell,
};
pub use request_response::{
    AddStaffRequest, CoverageDayResponse, CoverageResponse, DayCellResponse, EditModeResponse,
    EditorResponse, OpenCellRequest, ReloadResponse, RosterResponse, SelectWeekRequest,
    SetFilterRequest, StaffChangeResponse, StaffMemberResponse, UpdateEntryRequest,
};
pub use view::RosterView;
