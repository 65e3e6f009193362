//! Append-only audit log for docket.
//!
//! Every successful mutation appends one JSON object per line (NDJSON) to the
//! events file, by default `<active_root>/.docket-events.ndjson`. The file
//! sits next to the task directories but is a plain file, so catalog
//! loading never mistakes it for a task.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: create, update, priority, subtasks, delete, complete
//! - `actor`: `user@HOST`
//! - `task`: task id, when the event concerns one task
//! - `details`: action-specific object
//!
//! Events are appended after the mutation succeeded. A failed append is
//! reported but does not undo the mutation.

use crate::context::CatalogContext;
use crate::error::{DocketError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Task directory created
    Create,
    /// Task renamed or contact fields edited
    Update,
    /// Priority flag changed
    Priority,
    /// Sub-task list changed
    Subtasks,
    /// Task directory removed
    Delete,
    /// Task moved to the completed catalog
    Complete,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Create => write!(f, "create"),
            EventAction::Update => write!(f, "update"),
            EventAction::Priority => write!(f, "priority"),
            EventAction::Subtasks => write!(f, "subtasks"),
            EventAction::Delete => write!(f, "delete"),
            EventAction::Complete => write!(f, "complete"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,

    pub action: EventAction,

    /// `user@HOST` of whoever ran the command.
    pub actor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,

    pub details: Value,
}

impl Event {
    /// New event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            task: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_task(mut self, task_id: impl Into<String>) -> Self {
        self.task = Some(task_id.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize to a single JSON line without the trailing newline.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| DocketError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append `event` to the context's events file.
///
/// Does nothing when no events file can be placed (no active root and no
/// explicit `events_path`).
pub fn append_event(ctx: &CatalogContext, event: &Event) -> Result<()> {
    match ctx.events_path() {
        Some(path) => append_event_to(path, event),
        None => {
            tracing::debug!(action = %event.action, "no events path; event not recorded");
            Ok(())
        }
    }
}

/// Append `event` to the NDJSON file at `events_file`, creating its parent
/// directory and the file as needed.
pub fn append_event_to(events_file: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = events_file.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| DocketError::io(dir, e))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(events_file)
        .map_err(|e| DocketError::io(events_file, e))?;

    writeln!(file, "{}", json_line).map_err(|e| DocketError::io(events_file, e))?;
    file.sync_all().map_err(|e| DocketError::io(events_file, e))?;

    Ok(())
}

/// Append an event, downgrading failure to a warning.
///
/// Used after a mutation already succeeded: the task change stands either
/// way.
pub fn record(ctx: &CatalogContext, event: Event) {
    if let Err(e) = append_event(ctx, &event) {
        tracing::warn!(action = %event.action, error = %e, "failed to record event");
    }
}
