//! Implementation of `docket delete` and `docket complete`.

use super::require_confirmation;
use crate::cli::ConfirmArgs;
use crate::context::CatalogContext;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use serde_json::json;

/// Remove a task directory for good.
pub fn cmd_delete(ctx: &CatalogContext, args: ConfirmArgs) -> Result<()> {
    require_confirmation(args.yes, "delete", &args.id)?;

    let mut catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let removed = ctx.lifecycle().delete(&mut catalog, &args.id)?;

    events::record(
        ctx,
        Event::new(EventAction::Delete)
            .with_task(removed.id.clone())
            .with_details(json!({ "folder": removed.folder_path.display().to_string() })),
    );

    println!("Deleted task: {}", removed.id);
    Ok(())
}

/// Move a task into the completed catalog.
pub fn cmd_complete(ctx: &CatalogContext, args: ConfirmArgs) -> Result<()> {
    require_confirmation(args.yes, "complete", &args.id)?;

    let completed_root = ctx.completed_root()?;
    let mut catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let moved = ctx
        .lifecycle()
        .complete(&mut catalog, &args.id, completed_root)?;

    events::record(
        ctx,
        Event::new(EventAction::Complete)
            .with_task(moved.id.clone())
            .with_details(json!({ "to": moved.folder_path.display().to_string() })),
    );

    println!("Completed task: {}", moved.id);
    println!("  Moved to: {}", moved.folder_path.display());
    Ok(())
}
