//! Implementation of the `docket add` command.

use super::apply_contact;
use crate::cli::{AddArgs, ContactArgs};
use crate::context::CatalogContext;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::record::ContactFields;
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde_json::json;

/// Create a new task directory under the active root.
pub fn cmd_add(ctx: &CatalogContext, args: AddArgs) -> Result<()> {
    let root = ctx.active_root()?;
    let contact = contact_from_args(args.contact, args.end_date);

    let record = ctx
        .lifecycle()
        .create(root, args.end_date.year(), &args.name, contact)?;

    events::record(
        ctx,
        Event::new(EventAction::Create)
            .with_task(record.id.clone())
            .with_details(json!({
                "folder": record.folder_path.display().to_string(),
                "end_date": record.contact.end_date.format("%Y-%m-%d").to_string(),
            })),
    );

    println!("Created task: {}", record.id);
    println!("  Folder: {}", record.folder_path.display());
    Ok(())
}

/// Contact fields for a new task; anything not given is "[Not provided]".
fn contact_from_args(args: ContactArgs, end_date: NaiveDate) -> ContactFields {
    let mut fields = ContactFields::defaults(end_date.and_time(NaiveTime::MIN));
    fields.end_date = end_date;
    apply_contact(args, &mut fields);
    fields
}
