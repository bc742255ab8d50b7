// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::records::{delete_record, upsert_record};
use async_trait::async_trait;
use roster::{RepositoryError, RosterRepository};
use roster_domain::{StaffId, StaffMember, StaffRecord};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// A repository storing every record in one JSON array on disk.
///
/// A missing or empty file reads as an empty roster; the file and any missing
/// parent directories are created on the first write. Each write goes to a
/// temporary sibling that is synced to disk and then renamed over the original.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    /// Creates a repository backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<StaffRecord>, RepositoryError> {
        let contents: String = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Roster file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(RepositoryError::Unavailable(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            RepositoryError::Serialization(format!(
                "failed to parse {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn write_records(&self, records: &[StaffRecord]) -> Result<(), RepositoryError> {
        let json: String = serde_json::to_string_pretty(records)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RepositoryError::Storage(format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let mut temp_path: PathBuf = self.path.clone();
        temp_path.set_extension("json.tmp");

        let write_error = |e: std::io::Error| {
            RepositoryError::Storage(format!("failed to write {}: {e}", temp_path.display()))
        };
        let mut file: tokio::fs::File = tokio::fs::File::create(&temp_path)
            .await
            .map_err(write_error)?;
        file.write_all(json.as_bytes()).await.map_err(write_error)?;
        file.sync_all().await.map_err(write_error)?;
        drop(file);

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| {
                RepositoryError::Storage(format!(
                    "failed to replace {}: {e}",
                    self.path.display()
                ))
            })?;

        debug!(
            path = %self.path.display(),
            record_count = records.len(),
            "Roster file written"
        );
        Ok(())
    }
}

#[async_trait]
impl RosterRepository for JsonFileRepository {
    async fn get_all(&self) -> Result<Vec<StaffRecord>, RepositoryError> {
        let records: Vec<StaffRecord> = self.read_records().await?;
        info!(
            path = %self.path.display(),
            record_count = records.len(),
            "Roster file read"
        );
        Ok(records)
    }

    async fn upsert(&self, staff: &StaffMember) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<StaffRecord> = self.read_records().await?;
        upsert_record(&mut records, staff);
        self.write_records(&records).await
    }

    async fn delete(&self, staff_id: &StaffId) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<StaffRecord> = self.read_records().await?;
        delete_record(&mut records, staff_id)?;
        self.write_records(&records).await
    }
}
