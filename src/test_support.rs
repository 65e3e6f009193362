use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Active and completed roots inside one temporary directory.
pub(crate) struct TestRoots {
    _temp: TempDir,
    pub(crate) active: PathBuf,
    pub(crate) completed: PathBuf,
}

impl TestRoots {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let active = temp.path().join("orders");
        let completed = temp.path().join("done");
        std::fs::create_dir(&active).unwrap();
        std::fs::create_dir(&completed).unwrap();
        Self {
            _temp: temp,
            active,
            completed,
        }
    }
}

/// 2024-05-01 12:00, the clock every test pins.
pub(crate) fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Create a task directory with optional raw `optionalData.txt` and
/// `priority.txt` contents.
pub(crate) fn write_task_dir(
    root: &Path,
    name: &str,
    contact: Option<&str>,
    priority: Option<&str>,
) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    if let Some(contact) = contact {
        std::fs::write(dir.join("optionalData.txt"), contact).unwrap();
    }
    if let Some(priority) = priority {
        std::fs::write(dir.join("priority.txt"), priority).unwrap();
    }
    dir
}
