//! Sub-task list (`tasks.txt`).

use super::{RecordStore, SUBTASKS_FILE, read_optional};
use crate::error::{DocketError, Result};
use crate::record::ensure_single_line;
use std::path::Path;

/// Turn comma-separated user input into `- item` entries.
///
/// Empty pieces are dropped. Input with no items at all is an error.
pub fn parse_subtask_input(input: &str) -> Result<Vec<String>> {
    let items: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| format!("- {}", item))
        .collect();

    if items.is_empty() {
        return Err(DocketError::UserError(
            "enter at least one sub-task".to_string(),
        ));
    }

    Ok(items)
}

impl RecordStore {
    /// Load sub-tasks in file order, trimmed, blank lines dropped.
    pub fn load_subtasks(&self, dir: &Path) -> Result<Vec<String>> {
        let Some(content) = read_optional(&dir.join(SUBTASKS_FILE))? else {
            return Ok(Vec::new());
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Replace `tasks.txt` with exactly `items`, one per line.
    pub fn save_subtasks(&self, dir: &Path, items: &[String]) -> Result<()> {
        let mut content = String::new();
        for item in items {
            ensure_single_line("sub-task", item)?;
            content.push_str(item);
            content.push('\n');
        }
        self.write(&dir.join(SUBTASKS_FILE), &content)
    }
}
