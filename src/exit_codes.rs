//! Exit code constants for the docket CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown task, invalid config)
//! - 2: A catalog root directory does not exist
//! - 3: Lifecycle failure (create/rename/delete/complete)
//! - 4: Generic I/O failure while reading or writing metadata

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown task id, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The active catalog root does not exist.
pub const DIRECTORY_MISSING: i32 = 2;

/// A directory-level lifecycle operation failed or conflicted.
pub const LIFECYCLE_FAILURE: i32 = 3;

/// Reading or writing a metadata file failed.
pub const IO_FAILURE: i32 = 4;
