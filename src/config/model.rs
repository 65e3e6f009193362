//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for docket.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Catalog roots
    // =========================================================================
    /// Directory holding one subdirectory per active task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_root: Option<PathBuf>,

    /// Directory completed tasks are moved into. Created on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_root: Option<PathBuf>,

    // =========================================================================
    // Record behavior
    // =========================================================================
    /// A task is near its deadline when its end date is at most this many
    /// days away.
    #[serde(default = "default_near_deadline_days")]
    pub near_deadline_days: u32,

    /// Index assignment for newly created folders.
    #[serde(default)]
    pub index_strategy: IndexStrategy,

    /// Replace metadata files via temp file + rename instead of truncating.
    #[serde(default = "default_true")]
    pub atomic_writes: bool,

    /// Also write the secondary `endDate.txt` when a task is edited.
    #[serde(default = "default_true")]
    pub write_legacy_end_date: bool,

    // =========================================================================
    // Host integration
    // =========================================================================
    /// Command used to open a task folder (the path is appended as the last
    /// argument). Falls back to the platform file browser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_command: Option<String>,

    /// Audit log location (default: `<active_root>/.docket-events.ndjson`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_root: None,
            completed_root: None,
            near_deadline_days: default_near_deadline_days(),
            index_strategy: IndexStrategy::default(),
            atomic_writes: default_true(),
            write_legacy_end_date: default_true(),
            open_command: None,
            events_path: None,
        }
    }
}
