//! Listing mutation commands
//!
//! Create, update, and delete operations for the user's own listings.

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::Context;
use crate::output::{print_error, print_single, print_success};
use swaphub_core::forms::ListingForm;
use swaphub_core::{ImageAttachment, Item, ItemPatch, ItemUpdate, NewListing};

use super::types::ItemRow;

#[allow(clippy::too_many_arguments)]
pub async fn add_listing(
    ctx: &Context,
    title: String,
    description: String,
    points: i64,
    category: String,
    condition: String,
    size: String,
    color: String,
    brand: String,
    images: Vec<PathBuf>,
) -> Result<()> {
    let mut form = ListingForm::new();
    form.listing.title = title;
    form.listing.description = description;
    form.listing.point_value = points;
    form.listing.category = category;
    form.listing.condition = condition;
    form.listing.size = size;
    form.listing.color = color;
    form.listing.brand = brand;

    for path in &images {
        form.add_image(ImageAttachment::from_path(path)?)?;
    }

    let item = form.submit(&ctx.client).await?;
    print_success(&format!("Created listing #{}", item.id), ctx.quiet);
    if !ctx.quiet {
        print_single(&ItemRow::from(item), ctx.format)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn update_listing(
    ctx: &Context,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    points: Option<i64>,
    category: Option<String>,
    condition: Option<String>,
    size: Option<String>,
    color: Option<String>,
    brand: Option<String>,
    images: Vec<PathBuf>,
) -> Result<()> {
    let item = if images.is_empty() {
        // Field-only edit goes out as a JSON patch
        let patch = ItemPatch {
            title,
            description,
            point_value: points,
            category,
            condition,
            size,
            color,
            brand,
            ..Default::default()
        };
        ctx.client.update_item(id, &ItemUpdate::Json(patch)).await?
    } else {
        // Replacement images force a full multipart re-submission; prefill
        // from the current listing so unset flags keep their values
        let current = ctx.client.get_item(id).await?;
        let mut form = ListingForm::edit(id);
        form.listing = merged_listing(
            &current, title, description, points, category, condition, size, color, brand,
        );
        for path in &images {
            form.add_image(ImageAttachment::from_path(path)?)?;
        }
        form.submit(&ctx.client).await?
    };

    print_success(&format!("Updated listing #{}", item.id), ctx.quiet);
    if !ctx.quiet {
        print_single(&ItemRow::from(item), ctx.format)?;
    }
    Ok(())
}

/// Resubmission payload for an edit: explicit flags win, everything else
/// carries over from the fetched listing.
#[allow(clippy::too_many_arguments)]
fn merged_listing(
    current: &Item,
    title: Option<String>,
    description: Option<String>,
    points: Option<i64>,
    category: Option<String>,
    condition: Option<String>,
    size: Option<String>,
    color: Option<String>,
    brand: Option<String>,
) -> NewListing {
    NewListing {
        title: title.unwrap_or_else(|| current.title.clone()),
        description: description.unwrap_or_else(|| current.description.clone()),
        point_value: points.unwrap_or(current.point_value),
        category: category.unwrap_or_else(|| current.category.clone()),
        condition: condition.unwrap_or_else(|| current.condition.clone()),
        size: size.unwrap_or_else(|| current.size.clone()),
        color: color.unwrap_or_else(|| current.color.clone()),
        brand: brand.unwrap_or_else(|| current.brand.clone()),
        images: Vec::new(),
    }
}

pub async fn delete_listing(ctx: &Context, id: i64, force: bool) -> Result<()> {
    if !force {
        print_error(&format!(
            "This permanently deletes listing #{}. Re-run with --force to confirm.",
            id
        ));
        return Ok(());
    }

    ctx.client.delete_item(id).await?;
    print_success(&format!("Deleted listing #{}", id), ctx.quiet);
    Ok(())
}
