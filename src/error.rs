//! Error types for docket.
//!
//! Every failure is scoped to the single requested operation. Malformed
//! optional metadata is not an error at all: loaders fall back to defaults.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for docket operations.
#[derive(Error, Debug)]
pub enum DocketError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A catalog root that must already exist is missing.
    #[error("directory does not exist: {}", .0.display())]
    DirectoryMissing(PathBuf),

    /// A task directory (or its initial metadata) could not be created.
    #[error("failed to create task '{}': {reason}", .path.display())]
    CreationError { path: PathBuf, reason: String },

    /// A rename would land on a directory that already exists.
    #[error("cannot rename '{}': '{}' already exists", .from.display(), .to.display())]
    RenameConflict { from: PathBuf, to: PathBuf },

    /// A task directory could not be removed.
    #[error("failed to delete '{}': {reason}", .path.display())]
    DeletionError { path: PathBuf, reason: String },

    /// A task directory could not be moved into the completed catalog.
    #[error("failed to complete '{}': {reason}", .path.display())]
    CompletionError { path: PathBuf, reason: String },

    /// The host file browser could not be launched.
    #[error("failed to open '{}': {reason}", .path.display())]
    OpenError { path: PathBuf, reason: String },

    /// Generic read/write failure on a metadata file or directory.
    #[error("I/O error on '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocketError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DocketError::UserError(_) => exit_codes::USER_ERROR,
            DocketError::DirectoryMissing(_) => exit_codes::DIRECTORY_MISSING,
            DocketError::CreationError { .. }
            | DocketError::RenameConflict { .. }
            | DocketError::DeletionError { .. }
            | DocketError::CompletionError { .. }
            | DocketError::OpenError { .. } => exit_codes::LIFECYCLE_FAILURE,
            DocketError::IoError { .. } => exit_codes::IO_FAILURE,
        }
    }

    /// Wrap an `io::Error` together with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        DocketError::IoError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type alias for docket operations.
pub type Result<T> = std::result::Result<T, DocketError>;
