//! Implementation of the `docket subtask` commands.

use crate::cli::{SubtaskAddArgs, SubtaskRemoveArgs, TaskArgs};
use crate::context::CatalogContext;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::record::TaskRecord;
use serde_json::json;

pub fn cmd_subtask_list(ctx: &CatalogContext, args: TaskArgs) -> Result<()> {
    let mut catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let record = catalog.require_mut(&args.id)?;
    ctx.lifecycle().load_subtasks(record)?;

    print_subtasks(record);
    Ok(())
}

pub fn cmd_subtask_add(ctx: &CatalogContext, args: SubtaskAddArgs) -> Result<()> {
    let mut catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let record = catalog.require_mut(&args.id)?;
    ctx.lifecycle().add_subtasks(record, &args.input)?;

    events::record(
        ctx,
        Event::new(EventAction::Subtasks)
            .with_task(record.id.clone())
            .with_details(json!({
                "input": args.input,
                "count": record.sub_tasks.len(),
            })),
    );

    print_subtasks(record);
    Ok(())
}

pub fn cmd_subtask_remove(ctx: &CatalogContext, args: SubtaskRemoveArgs) -> Result<()> {
    let mut catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let record = catalog.require_mut(&args.id)?;

    // The CLI counts from 1; clap rejects 0.
    let position = args.position as usize - 1;
    let removed = ctx.lifecycle().remove_subtask(record, position)?;

    events::record(
        ctx,
        Event::new(EventAction::Subtasks)
            .with_task(record.id.clone())
            .with_details(json!({
                "removed": removed,
                "position": args.position,
            })),
    );

    println!("Removed: {}", removed);
    print_subtasks(record);
    Ok(())
}

fn print_subtasks(record: &TaskRecord) {
    if record.sub_tasks.is_empty() {
        println!("{} has no sub-tasks.", record.id);
        return;
    }
    println!("Sub-tasks of {}:", record.id);
    for (i, item) in record.sub_tasks.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, item);
    }
}
