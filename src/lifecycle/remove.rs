//! Retiring tasks: delete and complete.

use super::Lifecycle;
use crate::catalog::Catalog;
use crate::error::{DocketError, Result};
use crate::fs::move_dir;
use crate::record::TaskRecord;
use std::fs;
use std::path::Path;

impl Lifecycle {
    /// Recursively remove the task's directory, then drop it from `catalog`.
    ///
    /// A directory that is already gone is a `DeletionError`; the record
    /// stays listed so the inconsistency is visible.
    pub fn delete(&self, catalog: &mut Catalog, id: &str) -> Result<TaskRecord> {
        let path = catalog.require(id)?.folder_path.clone();

        if !path.is_dir() {
            return Err(DocketError::DeletionError {
                path,
                reason: "directory no longer exists".to_string(),
            });
        }

        fs::remove_dir_all(&path).map_err(|e| DocketError::DeletionError {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), "task deleted");
        catalog
            .remove(id)
            .ok_or_else(|| DocketError::UserError(format!("task '{}' vanished from catalog", id)))
    }

    /// Move the task's directory intact into `completed_root` and drop it
    /// from `catalog`. Returns the record pointing at its new location.
    pub fn complete(
        &self,
        catalog: &mut Catalog,
        id: &str,
        completed_root: &Path,
    ) -> Result<TaskRecord> {
        let source = catalog.require(id)?.folder_path.clone();
        let fail = |reason: String| DocketError::CompletionError {
            path: source.clone(),
            reason,
        };

        if !source.is_dir() {
            return Err(fail("directory no longer exists".to_string()));
        }

        fs::create_dir_all(completed_root).map_err(|e| {
            fail(format!(
                "cannot create completed root '{}': {}",
                completed_root.display(),
                e
            ))
        })?;

        let destination = completed_root.join(id);
        if destination.exists() {
            return Err(fail(format!(
                "'{}' already exists in the completed catalog",
                destination.display()
            )));
        }

        move_dir(&source, &destination).map_err(|e| fail(e.to_string()))?;

        tracing::info!(from = %source.display(), to = %destination.display(), "task completed");
        let mut record = catalog
            .remove(id)
            .ok_or_else(|| DocketError::UserError(format!("task '{}' vanished from catalog", id)))?;
        record.relocate(destination);
        Ok(record)
    }
}
