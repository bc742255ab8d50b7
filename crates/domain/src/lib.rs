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

mod config;
mod error;
mod filter;
mod location;
mod types;
mod validation;
mod week;

#[cfg(test)]
mod tests;

pub use config::{CoverageThresholds, RosterConfig};
pub use error::DomainError;
pub use filter::{FilterCriteria, RoleFilter};
pub use location::{BuildingFloors, LocationHierarchy};
pub use types::{
    AssignmentCell, Building, Floor, ShiftAssignment, ShiftType, StaffDraft, StaffId,
    StaffMember, StaffRecord, StaffRole,
};
pub use validation::{validate_staff_draft, validate_staff_id_unique};
pub use week::{ISO_DATE, WeekWindow, format_iso_date, parse_iso_date};

pub use time::{Date, Weekday};
