//! Implementation of the `docket priority` command.

use crate::cli::PriorityArgs;
use crate::context::CatalogContext;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use serde_json::json;

/// Set the priority flag and report where the task now sorts.
pub fn cmd_priority(ctx: &CatalogContext, args: PriorityArgs) -> Result<()> {
    let mut catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let is_priority = args.state.is_on();

    let record = catalog.require_mut(&args.id)?;
    ctx.lifecycle().set_priority(record, is_priority)?;
    catalog.sort();

    events::record(
        ctx,
        Event::new(EventAction::Priority)
            .with_task(args.id.clone())
            .with_details(json!({ "is_priority": is_priority })),
    );

    let position = catalog.position(&args.id).map(|p| p + 1).unwrap_or(0);
    println!(
        "{} {} priority (position {} of {})",
        args.id,
        if is_priority { "marked as" } else { "removed from" },
        position,
        catalog.len()
    );
    Ok(())
}
