//! Lifecycle operations on task directories.
//!
//! Every operation persists first and only then touches the in-memory
//! record or catalog, so a failure leaves prior state exactly as it was.
//! `id` and `folder_path` are always updated together.
//!
//! - [`create`](Lifecycle::create): new `US_<year>_<index>_<name>` directory
//! - [`rename`](Lifecycle::rename) / [`update`](Lifecycle::update): edit a task
//! - [`set_priority`](Lifecycle::set_priority) and the sub-task mutators
//! - [`delete`](Lifecycle::delete) / [`complete`](Lifecycle::complete): retire a task
//! - [`open_location`](Lifecycle::open_location): hand the folder to the host

mod create;
mod open;
mod remove;
mod rename;

pub use open::{DirectoryOpener, SystemOpener};

use crate::config::{Config, IndexStrategy};
use crate::error::{DocketError, Result};
use crate::record::TaskRecord;
use crate::store::{RecordStore, parse_subtask_input};
use chrono::NaiveDateTime;

/// Settings shared by all lifecycle operations.
#[derive(Debug, Clone, Copy)]
pub struct Lifecycle {
    store: RecordStore,
    index_strategy: IndexStrategy,
    near_deadline_days: u32,
    write_legacy_end_date: bool,
    now: NaiveDateTime,
}

impl Lifecycle {
    pub fn from_config(config: &Config, now: NaiveDateTime) -> Self {
        Self {
            store: RecordStore::new(config.write_mode()),
            index_strategy: config.index_strategy,
            near_deadline_days: config.near_deadline_days,
            write_legacy_end_date: config.write_legacy_end_date,
            now,
        }
    }

    /// Persist the priority flag, then set it on the record.
    ///
    /// The caller re-sorts its catalog afterwards.
    pub fn set_priority(&self, record: &mut TaskRecord, is_priority: bool) -> Result<()> {
        self.store.save_priority(&record.folder_path, is_priority)?;
        record.is_priority = is_priority;
        tracing::debug!(task = %record.id, is_priority, "priority updated");
        Ok(())
    }

    /// Load the record's sub-tasks from disk into `record.sub_tasks`.
    pub fn load_subtasks(&self, record: &mut TaskRecord) -> Result<()> {
        record.sub_tasks = self.store.load_subtasks(&record.folder_path)?;
        Ok(())
    }

    /// Replace the whole sub-task list.
    pub fn set_subtasks(&self, record: &mut TaskRecord, items: Vec<String>) -> Result<()> {
        self.store.save_subtasks(&record.folder_path, &items)?;
        record.sub_tasks = items;
        Ok(())
    }

    /// Append comma-separated entries to the stored list.
    pub fn add_subtasks(&self, record: &mut TaskRecord, input: &str) -> Result<()> {
        let parsed = parse_subtask_input(input)?;
        let mut items = self.store.load_subtasks(&record.folder_path)?;
        items.extend(parsed);
        self.set_subtasks(record, items)
    }

    /// Remove the entry at zero-based `position`. Duplicates are told apart
    /// by position, never by text.
    pub fn remove_subtask(&self, record: &mut TaskRecord, position: usize) -> Result<String> {
        let mut items = self.store.load_subtasks(&record.folder_path)?;
        if position >= items.len() {
            return Err(DocketError::UserError(format!(
                "task '{}' has {} sub-task(s); there is no entry {}",
                record.id,
                items.len(),
                position + 1
            )));
        }
        let removed = items.remove(position);
        self.set_subtasks(record, items)?;
        Ok(removed)
    }
}
