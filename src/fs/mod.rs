//! Filesystem utilities for docket.
//!
//! Metadata writes go through [`write_text`], which either replaces the file
//! atomically or truncates it in place depending on configuration. Task
//! directories move with [`move_dir`].

pub mod atomic;
mod move_dir;

pub use atomic::atomic_write_file;
pub use move_dir::move_dir;

use crate::error::{DocketError, Result};
use std::path::Path;

/// How metadata files are replaced on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Temp file + fsync + rename. A crash never leaves a truncated file.
    #[default]
    Atomic,
    /// Plain truncate-and-write.
    InPlace,
}

/// Replace the contents of `path` with `content` using the given mode.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str, mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    match mode {
        WriteMode::Atomic => atomic_write_file(path, content),
        WriteMode::InPlace => std::fs::write(path, content).map_err(|e| DocketError::io(path, e)),
    }
}
