//! Listing query commands

use anyhow::Result;

use crate::commands::Context;
use crate::output::print_output;

use super::types::ItemRow;

pub async fn list_my_items(ctx: &Context) -> Result<()> {
    let items = ctx.client.get_my_items().await?;
    let rows: Vec<ItemRow> = items.into_iter().map(ItemRow::from).collect();
    print_output(&rows, ctx.format)?;
    Ok(())
}
