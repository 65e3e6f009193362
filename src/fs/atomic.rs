//! Atomic file replacement.
//!
//! All atomic writes follow this pattern:
//! 1. Write content to `.{filename}.tmp` in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temp file over the target
//!
//! `std::fs::rename` replaces an existing destination on both POSIX and
//! Windows, and is atomic when source and destination share a volume, which
//! is always the case here because the temp file sits next to the target.
//! On crash a `.{filename}.tmp` file may remain; loaders never read it.

use crate::error::{DocketError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`.
///
/// Unlike in-place writes, the target is never observed half-written. The
/// parent directory must already exist: a task directory that vanished is
/// reported as an I/O error rather than silently recreated.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = generate_temp_path(path)?;

    write_and_sync(&temp_path, content)?;
    atomic_replace(&temp_path, path)?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            DocketError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| DocketError::io(path, e))?;

    if let Err(e) = file.write_all(content).and_then(|()| file.sync_all()) {
        let _ = fs::remove_file(path);
        return Err(DocketError::io(path, e));
    }

    Ok(())
}

fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    if let Err(e) = fs::rename(source, target) {
        let _ = fs::remove_file(source);
        return Err(DocketError::io(target, e));
    }

    sync_parent_dir(target);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}
