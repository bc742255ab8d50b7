// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::records::{delete_record, upsert_record};
use async_trait::async_trait;
use roster::{RepositoryError, RosterRepository};
use roster_domain::{StaffId, StaffMember, StaffRecord};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// A repository holding records in process memory.
///
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<Vec<StaffRecord>>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `records`.
    ///
    /// Records are stored as given, so legacy cell shapes survive until load.
    #[must_use]
    pub fn with_records(records: Vec<StaffRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Returns a copy of the stored records.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<StaffRecord>, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<StaffRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|e| RepositoryError::Storage(format!("record lock poisoned: {e}")))
    }
}

#[async_trait]
impl RosterRepository for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<StaffRecord>, RepositoryError> {
        self.snapshot()
    }

    async fn upsert(&self, staff: &StaffMember) -> Result<(), RepositoryError> {
        let mut records: MutexGuard<'_, Vec<StaffRecord>> = self.lock()?;
        upsert_record(&mut records, staff);
        debug!(staff_id = %staff.id, "Record stored in memory");
        Ok(())
    }

    async fn delete(&self, staff_id: &StaffId) -> Result<(), RepositoryError> {
        let mut records: MutexGuard<'_, Vec<StaffRecord>> = self.lock()?;
        delete_record(&mut records, staff_id)?;
        debug!(staff_id = %staff_id, "Record deleted from memory");
        Ok(())
    }
}
