//! Record store: the per-task metadata files inside one task directory.
//!
//! Each concern lives in its own plain-text file so that changing one field
//! never rewrites the others:
//!
//! ```text
//! US_2024_7_Smith/
//!   optionalData.txt   first, last, address, phone, end date (yyyy-MM-dd)
//!   priority.txt       True | False
//!   tasks.txt          "- item" per line
//!   endDate.txt        end date, legacy secondary copy
//! ```
//!
//! Loaders never fail on malformed content; they fall back to defaults.
//! Writers fully replace the file and surface I/O failures.

mod contact;
mod priority;
mod subtasks;
#[cfg(test)]
mod tests;

pub use contact::parse_date;
pub use subtasks::parse_subtask_input;

use crate::error::{DocketError, Result};
use crate::fs::{WriteMode, write_text};
use std::io;
use std::path::Path;

/// Contact fields and end date.
pub const CONTACT_FILE: &str = "optionalData.txt";

/// Priority flag.
pub const PRIORITY_FILE: &str = "priority.txt";

/// Sub-task list.
pub const SUBTASKS_FILE: &str = "tasks.txt";

/// Secondary end-date copy written on edit.
pub const LEGACY_END_DATE_FILE: &str = "endDate.txt";

/// Reads and writes the metadata files of task directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordStore {
    write_mode: WriteMode,
}

impl RecordStore {
    pub fn new(write_mode: WriteMode) -> Self {
        Self { write_mode }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        write_text(path, content, self.write_mode)
    }
}

/// Read an optional metadata file. `Ok(None)` when it does not exist.
///
/// Invalid UTF-8 is replaced rather than rejected so one bad byte cannot
/// hide the other lines. A leading byte-order mark is dropped.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(decode_text(&bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DocketError::io(path, e)),
    }
}

fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}
