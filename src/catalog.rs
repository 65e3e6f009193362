//! Catalog loading.
//!
//! A catalog is a flat set of task directories under one root. The active
//! and completed catalogs live under two different roots and never overlap.
//! Loading enumerates immediate subdirectories only; plain files in a root
//! (such as the audit log) are ignored.

use crate::error::{DocketError, Result};
use crate::ordering;
use crate::record::{TaskRecord, base_name, is_near_deadline};
use crate::store::RecordStore;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds records from task directories.
#[derive(Debug, Clone, Copy)]
pub struct CatalogLoader {
    store: RecordStore,
    now: NaiveDateTime,
    near_deadline_days: u32,
}

impl CatalogLoader {
    pub fn new(store: RecordStore, now: NaiveDateTime, near_deadline_days: u32) -> Self {
        Self {
            store,
            now,
            near_deadline_days,
        }
    }

    /// Load the active catalog in display order.
    ///
    /// Fails with `DirectoryMissing` when `root` does not exist.
    pub fn load_active(&self, root: &Path) -> Result<Catalog> {
        if !root.is_dir() {
            return Err(DocketError::DirectoryMissing(root.to_path_buf()));
        }
        let records = self.load_catalog(root)?;
        Ok(Catalog::new(root, ordering::sorted(records)))
    }

    /// Load the completed catalog in display order, creating `root` if needed.
    pub fn load_completed(&self, root: &Path) -> Result<Catalog> {
        if !root.exists() {
            tracing::info!(root = %root.display(), "creating completed catalog root");
            fs::create_dir_all(root).map_err(|e| DocketError::io(root, e))?;
        }
        let records = self.load_catalog(root)?;
        Ok(Catalog::new(root, ordering::sorted(records)))
    }

    /// One record per immediate subdirectory of `root`.
    ///
    /// The result is in file-name order, not display order.
    pub fn load_catalog(&self, root: &Path) -> Result<Vec<TaskRecord>> {
        let entries = fs::read_dir(root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DocketError::DirectoryMissing(root.to_path_buf()),
            _ => DocketError::io(root, e),
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DocketError::io(root, e))?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();

        Ok(dirs
            .into_iter()
            .filter_map(|dir| self.load_record(&dir))
            .collect())
    }

    /// Build the record for one task directory.
    ///
    /// Returns `None` for directories whose name is not valid UTF-8.
    pub fn load_record(&self, dir: &Path) -> Option<TaskRecord> {
        let Some(id) = base_name(dir) else {
            tracing::warn!(path = %dir.display(), "skipping directory with non-UTF-8 name");
            return None;
        };

        let contact = self.store.load_contact_fields(dir, self.now);
        let is_near_deadline = is_near_deadline(contact.end_date, self.now, self.near_deadline_days);

        Some(TaskRecord {
            id,
            is_priority: self.store.load_priority(dir),
            is_near_deadline,
            contact,
            folder_path: dir.to_path_buf(),
            sub_tasks: Vec::new(),
        })
    }
}

/// The records of one catalog root.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    records: Vec<TaskRecord>,
}

impl Catalog {
    pub fn new(root: &Path, records: Vec<TaskRecord>) -> Self {
        Self {
            root: root.to_path_buf(),
            records,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&TaskRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Position of a record in the current order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Like [`find`](Self::find), but an unknown id is a user error.
    pub fn require(&self, id: &str) -> Result<&TaskRecord> {
        let root = &self.root;
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| unknown_task(root, id))
    }

    /// Mutable [`require`](Self::require).
    pub fn require_mut(&mut self, id: &str) -> Result<&mut TaskRecord> {
        let root = &self.root;
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| unknown_task(root, id))
    }

    pub fn remove(&mut self, id: &str) -> Option<TaskRecord> {
        let pos = self.position(id)?;
        Some(self.records.remove(pos))
    }

    /// Re-sort into display order.
    pub fn sort(&mut self) {
        ordering::sort(&mut self.records);
    }
}

fn unknown_task(root: &Path, id: &str) -> DocketError {
    DocketError::UserError(format!(
        "no task named '{}' in '{}'.\n\nRun `docket list` to see available tasks.",
        id,
        root.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NOT_PROVIDED;
    use crate::test_support::{TestRoots, fixed_now, write_task_dir};

    fn loader() -> CatalogLoader {
        CatalogLoader::new(RecordStore::default(), fixed_now(), 7)
    }

    #[test]
    fn missing_active_root_is_directory_missing() {
        let roots = TestRoots::new();
        let missing = roots.active.join("nope");

        let err = loader().load_active(&missing).unwrap_err();

        assert!(matches!(err, DocketError::DirectoryMissing(p) if p == missing));
    }

    #[test]
    fn missing_completed_root_is_created() {
        let roots = TestRoots::new();
        std::fs::remove_dir(&roots.completed).unwrap();

        let catalog = loader().load_completed(&roots.completed).unwrap();

        assert!(catalog.is_empty());
        assert!(roots.completed.is_dir());
    }

    #[test]
    fn loads_one_record_per_subdirectory_only() {
        let roots = TestRoots::new();
        write_task_dir(&roots.active, "US_2024_1_Smith", Some("Jan\nKowalski\nx\ny\n2024-12-01\n"), None);
        write_task_dir(&roots.active, "imported", None, Some("True"));
        std::fs::write(roots.active.join("notes.txt"), "not a task").unwrap();
        std::fs::create_dir_all(roots.active.join("US_2024_1_Smith/nested")).unwrap();

        let records = loader().load_catalog(&roots.active).unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["US_2024_1_Smith", "imported"]);

        let smith = &records[0];
        assert_eq!(smith.contact.first_name, "Jan");
        assert!(!smith.is_priority);
        assert!(!smith.is_near_deadline);
        assert_eq!(smith.folder_path, roots.active.join("US_2024_1_Smith"));
        assert!(smith.sub_tasks.is_empty());

        let imported = &records[1];
        assert_eq!(imported.contact.first_name, NOT_PROVIDED);
        assert!(imported.is_priority);
        // Default end date is a week out, which is inside the window.
        assert!(imported.is_near_deadline);
    }

    #[test]
    fn load_active_returns_display_order() {
        let roots = TestRoots::new();
        write_task_dir(&roots.active, "US_2024_5_c", Some("a\nb\nc\nd\n2099-01-01\n"), None);
        write_task_dir(&roots.active, "US_2024_1_a", Some("a\nb\nc\nd\n2099-01-01\n"), Some("True"));
        write_task_dir(&roots.active, "US_2024_3_b", Some("a\nb\nc\nd\n2024-05-02\n"), None);

        let catalog = loader().load_active(&roots.active).unwrap();

        let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["US_2024_1_a", "US_2024_3_b", "US_2024_5_c"]);
        assert_eq!(catalog.root(), roots.active.as_path());
    }

    #[test]
    fn near_deadline_uses_configured_window() {
        let roots = TestRoots::new();
        // fixed_now() is 2024-05-01 12:00; this is nine and a half days out.
        write_task_dir(&roots.active, "t", Some("a\nb\nc\nd\n2024-05-11\n"), None);

        let narrow = loader().load_catalog(&roots.active).unwrap();
        let wide = CatalogLoader::new(RecordStore::default(), fixed_now(), 14)
            .load_catalog(&roots.active)
            .unwrap();

        assert!(!narrow[0].is_near_deadline);
        assert!(wide[0].is_near_deadline);
    }

    #[test]
    fn catalog_lookup_and_removal() {
        let roots = TestRoots::new();
        write_task_dir(&roots.active, "US_2024_1_a", None, None);
        write_task_dir(&roots.active, "US_2024_2_b", None, None);
        let mut catalog = loader().load_active(&roots.active).unwrap();

        assert!(catalog.find("US_2024_2_b").is_some());
        assert!(catalog.require("nope").is_err());
        assert_eq!(catalog.len(), 2);

        let removed = catalog.remove("US_2024_1_a").unwrap();
        assert_eq!(removed.id, "US_2024_1_a");
        assert!(catalog.remove("US_2024_1_a").is_none());
        assert_eq!(catalog.len(), 1);
    }
}
