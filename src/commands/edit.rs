//! Implementation of the `docket edit` command.

use super::apply_contact;
use crate::cli::EditArgs;
use crate::context::CatalogContext;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::record::naming::ConventionName;
use chrono::Datelike;
use serde_json::json;

/// Rename a task and/or rewrite its contact fields.
///
/// The folder year follows the end date, as when the task was created.
/// Without a new end date the year already in the id is kept.
pub fn cmd_edit(ctx: &CatalogContext, args: EditArgs) -> Result<()> {
    let mut catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let lifecycle = ctx.lifecycle();
    let record = catalog.require_mut(&args.id)?;
    let previous_id = record.id.clone();

    let mut contact = record.contact.clone();
    if let Some(end_date) = args.end_date {
        contact.end_date = end_date;
    }
    apply_contact(args.contact, &mut contact);

    let year = match (args.end_date, ConventionName::parse(&record.id)) {
        (Some(end_date), _) => end_date.year(),
        (None, Some(parsed)) => parsed.year,
        (None, None) => record.contact.end_date.year(),
    };
    let name = args
        .name
        .unwrap_or_else(|| record.display_name().to_string());

    lifecycle.update(record, year, &name, contact)?;

    events::record(
        ctx,
        Event::new(EventAction::Update)
            .with_task(record.id.clone())
            .with_details(json!({
                "previous_id": previous_id,
                "end_date": record.contact.end_date.format("%Y-%m-%d").to_string(),
            })),
    );

    if record.id != previous_id {
        println!("Renamed task: {} -> {}", previous_id, record.id);
    }
    println!("Updated task: {}", record.id);
    Ok(())
}
