//! CLI argument parsing for docket.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Docket: folder-backed order tracker.
///
/// Every order is a directory named `US_<year>_<index>_<name>` under the
/// active root. Plain-text files inside the directory hold its contact data,
/// end date, priority flag and sub-tasks. Completed orders are moved intact
/// into a separate root.
#[derive(Parser, Debug)]
#[command(name = "docket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to config.yaml (default: the platform config directory).
    #[arg(long, env = "DOCKET_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Active catalog root, overriding `active_root` from config.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Completed catalog root, overriding `completed_root` from config.
    #[arg(long, global = true)]
    pub completed_root: Option<PathBuf>,
}

/// Available commands for docket.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List active tasks in display order.
    ///
    /// Priority tasks first, then tasks near their deadline, then by index.
    List,

    /// List completed tasks.
    ///
    /// The completed root is created if it does not exist yet.
    Completed,

    /// Show one task's contact data and sub-tasks.
    Show(TaskArgs),

    /// Create a new task directory.
    ///
    /// The folder year is taken from the end date.
    Add(AddArgs),

    /// Edit a task's name, end date or contact fields.
    ///
    /// Fields that are not given keep their current values.
    Edit(EditArgs),

    /// Mark or unmark a task as priority.
    Priority(PriorityArgs),

    /// Sub-task management commands.
    Subtask(SubtaskCommand),

    /// Remove a task directory and everything in it.
    Delete(ConfirmArgs),

    /// Move a task to the completed catalog.
    Complete(ConfirmArgs),

    /// Open a task's directory in the file browser.
    Open(TaskArgs),
}

/// A single task id.
#[derive(Args, Debug)]
pub struct TaskArgs {
    /// Task id (directory name, e.g. US_2024_7_Smith).
    pub id: String,
}

/// Optional contact fields.
#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

/// Arguments for the `add` command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Free-form name, the last part of the folder name.
    pub name: String,

    /// End date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_end_date)]
    pub end_date: NaiveDate,

    #[command(flatten)]
    pub contact: ContactArgs,
}

/// Arguments for the `edit` command.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Task id.
    pub id: String,

    /// New free-form name. The index is kept.
    #[arg(long)]
    pub name: Option<String>,

    /// New end date (YYYY-MM-DD). Also sets the folder year.
    #[arg(long, value_parser = parse_end_date)]
    pub end_date: Option<NaiveDate>,

    #[command(flatten)]
    pub contact: ContactArgs,
}

/// Priority state.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        self == Toggle::On
    }
}

/// Arguments for the `priority` command.
#[derive(Args, Debug)]
pub struct PriorityArgs {
    /// Task id.
    pub id: String,

    /// on or off.
    #[arg(value_enum)]
    pub state: Toggle,
}

/// Arguments for `delete` and `complete`.
#[derive(Args, Debug)]
pub struct ConfirmArgs {
    /// Task id.
    pub id: String,

    /// Confirm the operation.
    #[arg(long)]
    pub yes: bool,
}

/// Sub-task commands.
#[derive(Args, Debug)]
pub struct SubtaskCommand {
    #[command(subcommand)]
    pub action: SubtaskAction,
}

/// Available sub-task actions.
#[derive(Subcommand, Debug)]
pub enum SubtaskAction {
    /// List a task's sub-tasks with their positions.
    List(TaskArgs),

    /// Append comma-separated sub-tasks.
    Add(SubtaskAddArgs),

    /// Remove the sub-task at a position (as shown by `subtask list`).
    Remove(SubtaskRemoveArgs),
}

/// Arguments for the `subtask add` command.
#[derive(Args, Debug)]
pub struct SubtaskAddArgs {
    /// Task id.
    pub id: String,

    /// Comma-separated entries, e.g. "buy paint, call back".
    pub input: String,
}

/// Arguments for the `subtask remove` command.
#[derive(Args, Debug)]
pub struct SubtaskRemoveArgs {
    /// Task id.
    pub id: String,

    /// 1-based position.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub position: u32,
}

fn parse_end_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", value, e))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
