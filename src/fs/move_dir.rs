//! Directory move helpers.
//!
//! Lifecycle transitions move a whole task directory, either to a new name
//! inside the same root (rename) or into another root (complete).
//!
//! On a single volume this is one atomic `rename(2)`. When the completed
//! root lives on another device the kernel answers `EXDEV`; we then copy the
//! tree and remove the source, deleting any partial copy if the copy fails
//! so the task is never left half-moved.

use crate::error::{DocketError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Move the directory `source` to `destination`.
///
/// `destination` must not exist. Its parent must exist.
pub fn move_dir<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if destination.exists() {
        return Err(DocketError::io(
            destination,
            io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
        ));
    }

    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device_rename(&e) => {
            tracing::warn!(
                source = %source.display(),
                destination = %destination.display(),
                "rename crossed devices; falling back to copy"
            );
            move_dir_cross_device(source, destination)
        }
        Err(e) => Err(DocketError::io(source, e)),
    }
}

fn move_dir_cross_device(source: &Path, destination: &Path) -> Result<()> {
    if let Err(e) = copy_tree(source, destination) {
        let _ = fs::remove_dir_all(destination);
        return Err(DocketError::io(destination, e));
    }

    fs::remove_dir_all(source).map_err(|e| DocketError::io(source, e))
}

fn copy_tree(source: &Path, destination: &Path) -> io::Result<()> {
    fs::create_dir(destination)?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let from = entry.path();
        let to = destination.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }

    Ok(())
}

fn is_cross_device_rename(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices || is_exdev(err)
}

/// EXDEV, for platforms whose std does not map it to `CrossesDevices`.
#[cfg(unix)]
fn is_exdev(err: &io::Error) -> bool {
    err.raw_os_error() == Some(18)
}

#[cfg(not(unix))]
fn is_exdev(_err: &io::Error) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn move_dir_moves_tree_intact() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("US_2024_1_Smith");
        fs::create_dir_all(source.join("photos")).unwrap();
        fs::write(source.join("tasks.txt"), "- measure\n").unwrap();
        fs::write(source.join("photos/front.jpg"), b"jpg").unwrap();

        let done = temp.path().join("done");
        fs::create_dir(&done).unwrap();
        let destination = done.join("US_2024_1_Smith");
        move_dir(&source, &destination).unwrap();

        assert!(!source.exists());
        assert_eq!(
            fs::read_to_string(destination.join("tasks.txt")).unwrap(),
            "- measure\n"
        );
        assert_eq!(fs::read(destination.join("photos/front.jpg")).unwrap(), b"jpg");
    }

    #[test]
    fn move_dir_refuses_existing_destination() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a");
        let destination = temp.path().join("b");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&destination).unwrap();

        let err = move_dir(&source, &destination).unwrap_err();

        assert!(matches!(err, DocketError::IoError { .. }));
        assert!(source.exists());
    }

    #[test]
    fn move_dir_missing_source_fails() {
        let temp = TempDir::new().unwrap();

        let err = move_dir(temp.path().join("gone"), temp.path().join("b")).unwrap_err();

        assert!(matches!(err, DocketError::IoError { .. }));
    }

    #[test]
    fn cross_device_detection() {
        assert!(is_cross_device_rename(&io::Error::from(io::ErrorKind::CrossesDevices)));
        assert!(!is_cross_device_rename(&io::Error::from(io::ErrorKind::NotFound)));
    }

    #[cfg(unix)]
    #[test]
    fn exdev_is_cross_device_on_unix() {
        assert!(is_cross_device_rename(&io::Error::from_raw_os_error(18)));
    }

    #[cfg(windows)]
    #[test]
    fn no_more_files_is_not_cross_device_on_windows() {
        // 18 is ERROR_NO_MORE_FILES here, not EXDEV.
        assert!(!is_cross_device_rename(&io::Error::from_raw_os_error(18)));
    }

    #[test]
    fn copy_tree_copies_nested_files() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        fs::create_dir_all(source.join("nested/deeper")).unwrap();
        fs::write(source.join("nested/deeper/f.txt"), "x").unwrap();

        let destination = temp.path().join("dst");
        copy_tree(&source, &destination).unwrap();

        assert!(source.exists());
        assert_eq!(
            fs::read_to_string(destination.join("nested/deeper/f.txt")).unwrap(),
            "x"
        );
    }
}
