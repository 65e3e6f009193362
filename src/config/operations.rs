//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{DocketError, Result};
use crate::fs::WriteMode;
use std::path::{Path, PathBuf};

/// Default config location: `<config dir>/docket/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docket").join("config.yaml"))
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DocketError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config the user asked for.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present and built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                DocketError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    pub fn validate(&self) -> Result<()> {
        if self.near_deadline_days == 0 {
            return Err(DocketError::UserError(
                "config validation failed: near_deadline_days must be greater than 0".to_string(),
            ));
        }

        if let (Some(active), Some(completed)) = (&self.active_root, &self.completed_root)
            && active == completed
        {
            return Err(DocketError::UserError(format!(
                "config validation failed: active_root and completed_root must differ (both '{}')",
                active.display()
            )));
        }

        if let Some(cmd) = &self.open_command {
            let words = shell_words::split(cmd).map_err(|e| {
                DocketError::UserError(format!(
                    "config validation failed: open_command '{}' cannot be parsed: {}",
                    cmd, e
                ))
            })?;
            if words.is_empty() {
                return Err(DocketError::UserError(
                    "config validation failed: open_command must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Write mode for metadata files.
    pub fn write_mode(&self) -> WriteMode {
        if self.atomic_writes {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }
}
