//! Folder naming convention for generated tasks.
//!
//! Directories created by docket are named `US_<year>_<index>_<name>`. The
//! index is assigned once at creation time and survives every rename; only
//! the year and the free-form name change on edit. Directories imported from
//! elsewhere may carry any name at all.

use crate::error::{DocketError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Prefix shared by every generated folder name.
pub const FOLDER_PREFIX: &str = "US_";

/// Glob that selects generated folders when counting for the next index.
pub const FOLDER_GLOB: &str = "US_*";

/// Index reported for ids that do not follow the convention.
pub const NO_INDEX: i64 = -1;

static CONVENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^US_(\d+)_(\d+)_(.*)$").expect("Invalid folder name regex")
});

/// A folder name that fully matches `US_<year>_<index>_<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionName {
    pub year: i32,
    pub index: i64,
    pub name: String,
}

impl ConventionName {
    /// Parse a folder name; `None` if it does not follow the convention.
    pub fn parse(id: &str) -> Option<Self> {
        let caps = CONVENTION_REGEX.captures(id)?;
        Some(Self {
            year: caps[1].parse().ok()?,
            index: caps[2].parse().ok()?,
            name: caps[3].to_string(),
        })
    }
}

/// Sort index embedded in an id: the third `_`-separated segment.
///
/// Ids without a numeric third segment yield [`NO_INDEX`], which places
/// them first within their sort tier. Segments outside the 32-bit range
/// count as non-numeric, matching folders written by earlier versions.
pub fn index_of(id: &str) -> i64 {
    id.split('_')
        .nth(2)
        .and_then(|segment| segment.parse::<i32>().ok())
        .map_or(NO_INDEX, i64::from)
}

/// Index to carry over when renaming. Ids without one restart at `0`.
pub fn index_for_rename(id: &str) -> i64 {
    match index_of(id) {
        NO_INDEX => 0,
        index => index,
    }
}

/// Human label for an id: everything after the third `_`, or the whole id.
pub fn display_name(id: &str) -> &str {
    let mut parts = id.splitn(4, '_');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(_), Some(_), Some(rest)) => rest,
        _ => id,
    }
}

/// Build a generated folder name.
pub fn folder_name(year: i32, index: i64, name: &str) -> String {
    format!("{}{}_{}_{}", FOLDER_PREFIX, year, index, name)
}

/// Reject free-form names that cannot safely become a single path component.
pub fn validate_freeform_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DocketError::UserError(
            "task name must not be empty".to_string(),
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(DocketError::UserError(format!(
            "invalid task name '{}': contains path separator characters",
            name
        )));
    }

    if name == "." || name == ".." {
        return Err(DocketError::UserError(format!(
            "invalid task name '{}'",
            name
        )));
    }

    if name.chars().any(char::is_control) {
        return Err(DocketError::UserError(format!(
            "invalid task name '{}': contains control characters",
            name.escape_debug()
        )));
    }

    Ok(())
}
