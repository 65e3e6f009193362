//! Task record model.
//!
//! One [`TaskRecord`] exists per task directory. Everything persistent about
//! a task lives in files inside `folder_path`; the record is the in-memory
//! view a collaborator renders and mutates through the store and lifecycle
//! operations.

pub mod naming;

use crate::error::{DocketError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::path::{Path, PathBuf};

/// Placeholder for contact fields that were never filled in.
pub const NOT_PROVIDED: &str = "[Not provided]";

/// Default window, in days, for the near-deadline flag and default end date.
pub const DEFAULT_DEADLINE_DAYS: u32 = 7;

/// Optional contact data and end date, stored in `optionalData.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    pub end_date: NaiveDate,
}

impl ContactFields {
    /// All contact strings set to [`NOT_PROVIDED`], end date `now + 7 days`.
    pub fn defaults(now: NaiveDateTime) -> Self {
        Self {
            first_name: NOT_PROVIDED.to_string(),
            last_name: NOT_PROVIDED.to_string(),
            address: NOT_PROVIDED.to_string(),
            phone_number: NOT_PROVIDED.to_string(),
            end_date: default_end_date(now),
        }
    }

    /// Every field must fit on one line of `optionalData.txt`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address),
            ("phone number", &self.phone_number),
        ];
        for (label, value) in fields {
            ensure_single_line(label, value)?;
        }
        Ok(())
    }
}

/// Metadata files are positional; a value with a line break would shift
/// every field after it.
pub(crate) fn ensure_single_line(field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(DocketError::UserError(format!(
            "{} must not contain line breaks: '{}'",
            field,
            value.escape_debug()
        )));
    }
    Ok(())
}

/// End date used when none is stored or it cannot be parsed.
pub fn default_end_date(now: NaiveDateTime) -> NaiveDate {
    (now + Duration::days(i64::from(DEFAULT_DEADLINE_DAYS))).date()
}

/// True when the end date (taken at midnight) is at most `window_days` away.
pub fn is_near_deadline(end_date: NaiveDate, now: NaiveDateTime, window_days: u32) -> bool {
    end_date.and_time(NaiveTime::MIN) - now <= Duration::days(i64::from(window_days))
}

/// Display tier of a record, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Priority,
    NearDeadline,
    Normal,
}

impl Urgency {
    /// Short marker for list output.
    pub fn marker(self) -> &'static str {
        match self {
            Urgency::Priority => "!",
            Urgency::NearDeadline => "~",
            Urgency::Normal => " ",
        }
    }
}

/// A task backed by one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Base name of the backing directory.
    pub id: String,
    pub contact: ContactFields,
    pub is_priority: bool,
    /// Derived at load time, never persisted.
    pub is_near_deadline: bool,
    pub folder_path: PathBuf,
    /// Only populated for the record currently being worked on.
    pub sub_tasks: Vec<String>,
}

impl TaskRecord {
    /// Label shown to the user.
    pub fn display_name(&self) -> &str {
        naming::display_name(&self.id)
    }

    /// Naming-convention index, or `-1`.
    pub fn index(&self) -> i64 {
        naming::index_of(&self.id)
    }

    pub fn urgency(&self) -> Urgency {
        if self.is_priority {
            Urgency::Priority
        } else if self.is_near_deadline {
            Urgency::NearDeadline
        } else {
            Urgency::Normal
        }
    }

    /// Point the record at a new directory. `id` and `folder_path` always
    /// change together and are both derived from `folder_path`.
    pub(crate) fn relocate(&mut self, folder_path: PathBuf) {
        self.id = base_name(&folder_path).unwrap_or_default();
        self.folder_path = folder_path;
    }

    /// Recompute the derived near-deadline flag.
    pub(crate) fn refresh_deadline(&mut self, now: NaiveDateTime, window_days: u32) {
        self.is_near_deadline = is_near_deadline(self.contact.end_date, now, window_days);
    }
}

/// UTF-8 base name of a path, if it has one.
pub(crate) fn base_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_string)
}
