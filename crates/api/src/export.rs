// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the visible week.
//!
//! One header row (`ID`, `Name`, `Role`, then each date ascending) followed by
//! one row per visible staff member. The output starts with a UTF-8 byte-order
//! mark so spreadsheet tools pick the right encoding.

use crate::error::ExportError;
use roster_domain::{Date, ShiftAssignment, StaffMember, WeekWindow, format_iso_date};

/// MIME type of the export.
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

/// Cell value for a day without assignments.
pub const OFF_CELL: &str = "OFF";

/// Separator between same-day assignments in one cell.
pub const ASSIGNMENT_SEPARATOR: &str = " + ";

const BYTE_ORDER_MARK: &str = "\u{feff}";

/// A rendered export ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterExport {
    /// Suggested download filename.
    pub filename: String,
    /// MIME type.
    pub content_type: &'static str,
    /// The file body, BOM included.
    pub body: String,
}

/// Returns `roster_<week-start>.csv`.
#[must_use]
pub fn export_filename(week: &WeekWindow) -> String {
    format!("roster_{}.csv", format_iso_date(week.start()))
}

/// Renders one day's assignments as a single cell.
#[must_use]
pub fn render_cell(assignments: &[ShiftAssignment]) -> String {
    if assignments.is_empty() {
        return String::from(OFF_CELL);
    }
    assignments
        .iter()
        .map(render_assignment)
        .collect::<Vec<String>>()
        .join(ASSIGNMENT_SEPARATOR)
}

/// Renders `Morning(2F-Main)`, `Morning(Main)` or `Morning`.
fn render_assignment(assignment: &ShiftAssignment) -> String {
    let label: &str = assignment.shift_type.label();
    match (&assignment.floor, &assignment.building) {
        (Some(floor), Some(building)) => format!("{label}({floor}-{building})"),
        (None, Some(building)) => format!("{label}({building})"),
        (Some(floor), None) => format!("{label}({floor})"),
        (None, None) => label.to_string(),
    }
}

/// Renders the week for the given staff members, in the order given.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn export_week(
    filtered: &[&StaffMember],
    week: &WeekWindow,
) -> Result<RosterExport, ExportError> {
    let dates: Vec<Date> = week.dates();
    let mut writer = csv::Writer::from_writer(BYTE_ORDER_MARK.as_bytes().to_vec());

    let mut header: Vec<String> = vec![
        String::from("ID"),
        String::from("Name"),
        String::from("Role"),
    ];
    header.extend(dates.iter().map(|date| format_iso_date(*date)));
    writer.write_record(&header)?;

    for member in filtered {
        let mut row: Vec<String> = vec![
            member.id.value().to_string(),
            member.name.clone(),
            member.role.label().to_string(),
        ];
        row.extend(
            dates
                .iter()
                .map(|date| render_cell(member.assignments_on(*date))),
        );
        writer.write_record(&row)?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))?;
    let body: String = String::from_utf8(bytes)?;

    Ok(RosterExport {
        filename: export_filename(week),
        content_type: EXPORT_CONTENT_TYPE,
        body,
    })
}
