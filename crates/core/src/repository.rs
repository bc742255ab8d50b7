// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary to whatever stores staff records.
//!
//! The roster only ever reads the full record set and writes whole records;
//! transport and storage layout belong to the implementation.

use async_trait::async_trait;
use roster_domain::{StaffId, StaffMember, StaffRecord};
use thiserror::Error;

/// Errors reported by a repository.
///
/// These are surfaced to callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// The record to change does not exist.
    #[error("record not found: {0}")]
    NotFound(StaffId),

    /// The backing store rejected or failed the operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// A record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Source of truth for persisted staff records.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Returns every stored record.
    async fn get_all(&self) -> Result<Vec<StaffRecord>, RepositoryError>;

    /// Inserts or fully replaces the record for `staff.id`.
    async fn upsert(&self, staff: &StaffMember) -> Result<(), RepositoryError>;

    /// Deletes the record for `staff_id` together with all its assignments.
    async fn delete(&self, staff_id: &StaffId) -> Result<(), RepositoryError>;
}
