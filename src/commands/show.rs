//! Implementation of the `docket show` command.

use crate::cli::TaskArgs;
use crate::context::CatalogContext;
use crate::error::Result;

/// Print one task's details and sub-tasks.
pub fn cmd_show(ctx: &CatalogContext, args: TaskArgs) -> Result<()> {
    let mut catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let lifecycle = ctx.lifecycle();
    let record = catalog.require_mut(&args.id)?;
    lifecycle.load_subtasks(record)?;

    let contact = &record.contact;
    println!("Task:      {}", record.id);
    println!("Name:      {}", record.display_name());
    println!("Folder:    {}", record.folder_path.display());
    println!("Priority:  {}", if record.is_priority { "yes" } else { "no" });
    println!(
        "End date:  {}{}",
        contact.end_date.format("%Y-%m-%d"),
        if record.is_near_deadline { "  (near deadline)" } else { "" }
    );
    println!();
    println!("First name: {}", contact.first_name);
    println!("Last name:  {}", contact.last_name);
    println!("Address:    {}", contact.address);
    println!("Phone:      {}", contact.phone_number);
    println!();

    if record.sub_tasks.is_empty() {
        println!("No sub-tasks.");
    } else {
        println!("Sub-tasks:");
        for (i, item) in record.sub_tasks.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, item);
        }
    }

    Ok(())
}
