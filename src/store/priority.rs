//! Priority flag (`priority.txt`).

use super::{PRIORITY_FILE, RecordStore, read_optional};
use crate::error::Result;
use std::path::Path;

impl RecordStore {
    /// Load the priority flag. Absent, unreadable or unparsable ⇒ `false`.
    pub fn load_priority(&self, dir: &Path) -> bool {
        let path = dir.join(PRIORITY_FILE);
        match read_optional(&path) {
            Ok(Some(content)) => content.trim().eq_ignore_ascii_case("true"),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable priority file");
                false
            }
        }
    }

    /// Overwrite `priority.txt` with `True` or `False`.
    pub fn save_priority(&self, dir: &Path, is_priority: bool) -> Result<()> {
        let token = if is_priority { "True" } else { "False" };
        self.write(&dir.join(PRIORITY_FILE), token)
    }
}
