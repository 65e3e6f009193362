//! Task creation and index assignment.

use super::Lifecycle;
use crate::config::IndexStrategy;
use crate::error::{DocketError, Result};
use crate::record::naming::{self, ConventionName, FOLDER_GLOB};
use crate::record::{ContactFields, TaskRecord, is_near_deadline};
use globset::Glob;
use std::fs;
use std::path::{Path, PathBuf};

impl Lifecycle {
    /// Create `US_<year>_<index>_<name>` under `root` and write its contact
    /// fields.
    ///
    /// The directory is created non-recursively, so an existing name is a
    /// `CreationError` rather than a silent merge. If the metadata cannot be
    /// written the fresh directory is removed again.
    pub fn create(
        &self,
        root: &Path,
        year: i32,
        freeform_name: &str,
        contact: ContactFields,
    ) -> Result<TaskRecord> {
        naming::validate_freeform_name(freeform_name)?;
        contact.validate()?;

        if !root.is_dir() {
            return Err(DocketError::DirectoryMissing(root.to_path_buf()));
        }

        let index = self.next_index(root)?;
        let folder_path = root.join(naming::folder_name(year, index, freeform_name));

        fs::create_dir(&folder_path).map_err(|e| DocketError::CreationError {
            path: folder_path.clone(),
            reason: e.to_string(),
        })?;

        if let Err(e) = self.store.save_contact_fields(&folder_path, &contact) {
            let _ = fs::remove_dir_all(&folder_path);
            return Err(DocketError::CreationError {
                path: folder_path,
                reason: e.to_string(),
            });
        }

        tracing::info!(path = %folder_path.display(), index, "task created");

        let mut record = TaskRecord {
            id: String::new(),
            is_priority: false,
            is_near_deadline: is_near_deadline(contact.end_date, self.now, self.near_deadline_days),
            contact,
            folder_path: PathBuf::new(),
            sub_tasks: Vec::new(),
        };
        record.relocate(folder_path);
        Ok(record)
    }

    /// Index for the next folder created under `root`.
    pub fn next_index(&self, root: &Path) -> Result<i64> {
        let names = subdirectory_names(root)?;
        Ok(match self.index_strategy {
            IndexStrategy::Count => count_generated(&names)? + 1,
            IndexStrategy::NextFree => {
                names
                    .iter()
                    .filter_map(|n| ConventionName::parse(n))
                    .map(|c| c.index)
                    .max()
                    .unwrap_or(0)
                    + 1
            }
        })
    }
}

/// Number of directory names matching the generated-folder glob.
fn count_generated(names: &[String]) -> Result<i64> {
    let matcher = Glob::new(FOLDER_GLOB)
        .map_err(|e| DocketError::UserError(format!("invalid folder glob: {}", e)))?
        .compile_matcher();
    let count = names.iter().filter(|n| matcher.is_match(n.as_str())).count();
    Ok(i64::try_from(count).unwrap_or(i64::MAX))
}

fn subdirectory_names(root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| DocketError::io(root, e))? {
        let entry = entry.map_err(|e| DocketError::io(root, e))?;
        if entry.path().is_dir()
            && let Some(name) = entry.file_name().to_str()
        {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
