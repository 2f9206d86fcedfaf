//! Listing commands
//!
//! Commands for managing your own listings: mine, add, update, delete.

mod mutations;
mod queries;
mod types;

use anyhow::Result;

use crate::commands::Context;

// Re-export public types
pub use types::{ItemRow, ListingAction};
pub(crate) use types::truncate;

pub async fn execute(ctx: &Context, action: ListingAction) -> Result<()> {
    match action {
        ListingAction::Mine => queries::list_my_items(ctx).await,
        ListingAction::Add {
            title,
            description,
            points,
            category,
            condition,
            size,
            color,
            brand,
            image,
        } => {
            mutations::add_listing(
                ctx, title, description, points, category, condition, size, color, brand, image,
            )
            .await
        }
        ListingAction::Update {
            id,
            title,
            description,
            points,
            category,
            condition,
            size,
            color,
            brand,
            image,
        } => {
            mutations::update_listing(
                ctx, id, title, description, points, category, condition, size, color, brand, image,
            )
            .await
        }
        ListingAction::Delete { id, force } => mutations::delete_listing(ctx, id, force).await,
    }
}
