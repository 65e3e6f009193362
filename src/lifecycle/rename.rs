//! Editing an existing task: rename and full update.

use super::Lifecycle;
use crate::error::{DocketError, Result};
use crate::fs::move_dir;
use crate::record::naming;
use crate::record::{ContactFields, TaskRecord};
use std::io;
use std::path::PathBuf;

impl Lifecycle {
    /// Rename the task's directory to `US_<new_year>_<index>_<new_name>`,
    /// keeping the index embedded in the current id.
    ///
    /// No-op when the name does not change. An existing destination is a
    /// `RenameConflict` and leaves both directory and record untouched.
    pub fn rename(&self, record: &mut TaskRecord, new_year: i32, new_name: &str) -> Result<()> {
        naming::validate_freeform_name(new_name)?;

        let index = naming::index_for_rename(&record.id);
        let new_id = naming::folder_name(new_year, index, new_name);
        if new_id == record.id {
            return Ok(());
        }

        let parent = record.folder_path.parent().ok_or_else(|| {
            DocketError::UserError(format!(
                "task folder '{}' has no parent directory",
                record.folder_path.display()
            ))
        })?;
        let destination = parent.join(&new_id);

        if destination.exists() {
            return Err(DocketError::RenameConflict {
                from: record.folder_path.clone(),
                to: destination,
            });
        }

        move_dir(&record.folder_path, &destination).map_err(|e| match e {
            DocketError::IoError { source, .. } if source.kind() == io::ErrorKind::AlreadyExists => {
                DocketError::RenameConflict {
                    from: record.folder_path.clone(),
                    to: destination.clone(),
                }
            }
            other => other,
        })?;

        tracing::info!(from = %record.id, to = %new_id, "task renamed");
        record.relocate(destination);
        Ok(())
    }

    /// Apply an edit: rename if needed, then rewrite the contact fields (and
    /// the legacy end-date copy when enabled).
    ///
    /// If the metadata cannot be written after a rename, the directory is
    /// moved back so the task keeps its previous name.
    pub fn update(
        &self,
        record: &mut TaskRecord,
        new_year: i32,
        new_name: &str,
        contact: ContactFields,
    ) -> Result<()> {
        contact.validate()?;
        let previous_path = record.folder_path.clone();
        self.rename(record, new_year, new_name)?;

        if let Err(e) = self.write_edit(record, &contact) {
            if record.folder_path != previous_path {
                self.undo_rename(record, previous_path);
            }
            return Err(e);
        }

        record.contact = contact;
        record.refresh_deadline(self.now, self.near_deadline_days);
        Ok(())
    }

    fn write_edit(&self, record: &TaskRecord, contact: &ContactFields) -> Result<()> {
        self.store.save_contact_fields(&record.folder_path, contact)?;
        if self.write_legacy_end_date {
            self.store
                .save_legacy_end_date(&record.folder_path, contact.end_date)?;
        }
        Ok(())
    }

    fn undo_rename(&self, record: &mut TaskRecord, previous_path: PathBuf) {
        match move_dir(&record.folder_path, &previous_path) {
            Ok(()) => record.relocate(previous_path),
            Err(e) => tracing::warn!(
                path = %record.folder_path.display(),
                error = %e,
                "could not restore previous task name after failed edit"
            ),
        }
    }
}
