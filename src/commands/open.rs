//! Implementation of the `docket open` command.

use crate::cli::TaskArgs;
use crate::context::CatalogContext;
use crate::error::Result;
use crate::lifecycle::SystemOpener;

pub fn cmd_open(ctx: &CatalogContext, args: TaskArgs) -> Result<()> {
    let catalog = ctx.loader().load_active(ctx.active_root()?)?;
    let record = catalog.require(&args.id)?;

    let opener = SystemOpener::new(ctx.config().open_command.clone());
    ctx.lifecycle().open_location(record, &opener)?;

    println!("Opened {}", record.folder_path.display());
    Ok(())
}
