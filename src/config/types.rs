//! Configuration types and defaults for docket.

use crate::record::DEFAULT_DEADLINE_DAYS;
use serde::{Deserialize, Serialize};

/// How `create` picks the index embedded in a new folder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndexStrategy {
    /// Number of `US_*` folders in the active root, plus one. Matches folders
    /// created by earlier versions, but can repeat an index after deletions.
    #[default]
    Count,
    /// Highest index among convention-named folders, plus one.
    NextFree,
}

// Default value functions for serde
pub(crate) fn default_near_deadline_days() -> u32 {
    DEFAULT_DEADLINE_DAYS
}
pub(crate) fn default_true() -> bool {
    true
}
