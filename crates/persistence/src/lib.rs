// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repository implementations for the staff roster.
//!
//! - [`InMemoryRepository`] keeps records in process memory. Used for tests
//!   and demo sessions.
//! - [`JsonFileRepository`] keeps every record in one JSON document on disk.
//!
//! Both store whole [`StaffRecord`](roster_domain::StaffRecord)s. Reads return
//! records in insertion order; an upsert of an existing id replaces the record
//! in place.

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

mod json_file;
mod memory;
mod records;

#[cfg(test)]
mod tests;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;
