//! Catalog context resolution for docket.
//!
//! Resolves the two catalog roots, the audit log location and the record
//! behavior switches from the loaded [`Config`] plus command-line overrides.
//! Every command goes through this layer; no path is compiled in.

use crate::catalog::CatalogLoader;
use crate::config::Config;
use crate::error::{DocketError, Result};
use crate::lifecycle::Lifecycle;
use crate::store::RecordStore;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// File name of the default audit log inside the active root.
pub const DEFAULT_EVENTS_FILE: &str = ".docket-events.ndjson";

/// Resolved paths and settings for one docket invocation.
#[derive(Debug, Clone)]
pub struct CatalogContext {
    active_root: Option<PathBuf>,
    completed_root: Option<PathBuf>,
    events_path: Option<PathBuf>,
    config: Config,
    now: NaiveDateTime,
}

impl CatalogContext {
    /// Build a context from config, with explicit roots taking precedence.
    pub fn new(
        config: Config,
        root_override: Option<PathBuf>,
        completed_override: Option<PathBuf>,
    ) -> Result<Self> {
        let active_root = root_override.or_else(|| config.active_root.clone());
        let completed_root = completed_override.or_else(|| config.completed_root.clone());

        if let (Some(active), Some(completed)) = (&active_root, &completed_root)
            && active == completed
        {
            return Err(DocketError::UserError(format!(
                "active and completed roots must differ (both '{}')",
                active.display()
            )));
        }

        let events_path = config
            .events_path
            .clone()
            .or_else(|| active_root.as_ref().map(|r| r.join(DEFAULT_EVENTS_FILE)));

        Ok(Self {
            active_root,
            completed_root,
            events_path,
            config,
            now: Local::now().naive_local(),
        })
    }

    /// Pin the clock used for defaults and near-deadline checks.
    #[cfg(test)]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Root of the active catalog.
    pub fn active_root(&self) -> Result<&Path> {
        self.active_root.as_deref().ok_or_else(|| {
            DocketError::UserError(
                "no active root configured.\n\
                 Pass --root <dir> or set `active_root` in config.yaml."
                    .to_string(),
            )
        })
    }

    /// Root of the completed catalog.
    pub fn completed_root(&self) -> Result<&Path> {
        self.completed_root.as_deref().ok_or_else(|| {
            DocketError::UserError(
                "no completed root configured.\n\
                 Pass --completed-root <dir> or set `completed_root` in config.yaml."
                    .to_string(),
            )
        })
    }

    /// Audit log file, if one can be placed.
    pub fn events_path(&self) -> Option<&Path> {
        self.events_path.as_deref()
    }

    pub fn store(&self) -> RecordStore {
        RecordStore::new(self.config.write_mode())
    }

    pub fn loader(&self) -> CatalogLoader {
        CatalogLoader::new(self.store(), self.now, self.config.near_deadline_days)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_config(&self.config, self.now)
    }
}
