//! Command implementations for docket.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every handler takes a resolved [`CatalogContext`] so it
//! can be driven from tests with temporary roots and a pinned clock.

mod add;
mod edit;
mod list;
mod open;
mod priority;
mod remove;
mod show;
mod subtask;

use crate::cli::{Cli, Command, ContactArgs, SubtaskAction, SubtaskCommand};
use crate::config::Config;
use crate::context::CatalogContext;
use crate::error::{DocketError, Result};
use crate::record::{ContactFields, TaskRecord};

/// Resolve config and roots, then run the command.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.global.config.as_deref())?;
    let ctx = CatalogContext::new(config, cli.global.root, cli.global.completed_root)?;
    run(&ctx, cli.command)
}

/// Run one command against an already resolved context.
pub fn run(ctx: &CatalogContext, command: Command) -> Result<()> {
    match command {
        Command::List => list::cmd_list(ctx),
        Command::Completed => list::cmd_completed(ctx),
        Command::Show(args) => show::cmd_show(ctx, args),
        Command::Add(args) => add::cmd_add(ctx, args),
        Command::Edit(args) => edit::cmd_edit(ctx, args),
        Command::Priority(args) => priority::cmd_priority(ctx, args),
        Command::Subtask(sub) => dispatch_subtask(ctx, sub),
        Command::Delete(args) => remove::cmd_delete(ctx, args),
        Command::Complete(args) => remove::cmd_complete(ctx, args),
        Command::Open(args) => open::cmd_open(ctx, args),
    }
}

fn dispatch_subtask(ctx: &CatalogContext, sub: SubtaskCommand) -> Result<()> {
    match sub.action {
        SubtaskAction::List(args) => subtask::cmd_subtask_list(ctx, args),
        SubtaskAction::Add(args) => subtask::cmd_subtask_add(ctx, args),
        SubtaskAction::Remove(args) => subtask::cmd_subtask_remove(ctx, args),
    }
}

/// One line of `list` / `completed` output.
fn render_row(record: &TaskRecord) -> String {
    format!(
        "{} {:<32} {}",
        record.urgency().marker(),
        record.id,
        record.contact.end_date.format("%Y-%m-%d")
    )
}

/// Refuse a destructive command that was not confirmed with `--yes`.
fn require_confirmation(yes: bool, verb: &str, id: &str) -> Result<()> {
    if yes {
        return Ok(());
    }
    Err(DocketError::UserError(format!(
        "refusing to {} '{}' without confirmation.\n\nRe-run with --yes.",
        verb, id
    )))
}

/// Overwrite the fields that were given on the command line.
fn apply_contact(args: ContactArgs, fields: &mut ContactFields) {
    if let Some(v) = args.first_name {
        fields.first_name = v;
    }
    if let Some(v) = args.last_name {
        fields.last_name = v;
    }
    if let Some(v) = args.address {
        fields.address = v;
    }
    if let Some(v) = args.phone {
        fields.phone_number = v;
    }
}
