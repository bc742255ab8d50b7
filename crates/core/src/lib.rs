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

mod coverage;
mod editor;
mod error;
mod filter;
mod repository;
mod store;

#[cfg(test)]
mod tests;

pub use coverage::{CoverageReport, DailyCoverage, compute_coverage};
pub use editor::{CellRef, EditorState, ShiftEditor};
pub use error::CoreError;
pub use filter::{filter_staff, passes_location, passes_role};
pub use repository::{RepositoryError, RosterRepository};
pub use store::RosterStore;
