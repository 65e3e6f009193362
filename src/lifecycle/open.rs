//! Handing a task folder to the host file browser.

use super::Lifecycle;
use crate::error::{DocketError, Result};
use crate::record::TaskRecord;
use std::path::Path;
use std::process::{Command, Stdio};

/// Host capability that shows a directory to the user.
pub trait DirectoryOpener {
    fn open_directory(&self, path: &Path) -> Result<()>;
}

/// Opens directories with the platform file browser, or a configured
/// command with the path appended.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    command: Option<String>,
}

impl SystemOpener {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn argv(&self) -> Result<Vec<String>> {
        match &self.command {
            Some(cmd) => shell_words::split(cmd).map_err(|e| {
                DocketError::UserError(format!("cannot parse open_command '{}': {}", cmd, e))
            }),
            None => Ok(vec![platform_browser().to_string()]),
        }
    }
}

fn platform_browser() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

impl DirectoryOpener for SystemOpener {
    fn open_directory(&self, path: &Path) -> Result<()> {
        let argv = self.argv()?;
        let (program, args) = argv.split_first().ok_or_else(|| {
            DocketError::UserError("open_command must not be empty".to_string())
        })?;

        // Browsers detach on their own; explorer even exits non-zero on
        // success, so the exit status is not inspected.
        Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DocketError::OpenError {
                path: path.to_path_buf(),
                reason: format!("failed to run '{}': {}", program, e),
            })?;

        Ok(())
    }
}

impl Lifecycle {
    /// Show the task's folder through `opener`.
    pub fn open_location(&self, record: &TaskRecord, opener: &dyn DirectoryOpener) -> Result<()> {
        if !record.folder_path.is_dir() {
            return Err(DocketError::DirectoryMissing(record.folder_path.clone()));
        }
        opener.open_directory(&record.folder_path)
    }
}
