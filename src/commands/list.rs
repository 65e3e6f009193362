//! Implementation of `docket list` and `docket completed`.

use super::render_row;
use crate::catalog::Catalog;
use crate::context::CatalogContext;
use crate::error::Result;

/// Print the active catalog in display order.
pub fn cmd_list(ctx: &CatalogContext) -> Result<()> {
    let catalog = ctx.loader().load_active(ctx.active_root()?)?;
    print_catalog(&catalog, "active");
    Ok(())
}

/// Print the completed catalog, creating its root on first use.
pub fn cmd_completed(ctx: &CatalogContext) -> Result<()> {
    let catalog = ctx.loader().load_completed(ctx.completed_root()?)?;
    print_catalog(&catalog, "completed");
    Ok(())
}

fn print_catalog(catalog: &Catalog, label: &str) {
    if catalog.is_empty() {
        println!("No {} tasks in {}", label, catalog.root().display());
        return;
    }

    for record in catalog.iter() {
        println!("{}", render_row(record));
    }
    println!();
    println!("{} {} task(s)  (! priority, ~ near deadline)", catalog.len(), label);
}
