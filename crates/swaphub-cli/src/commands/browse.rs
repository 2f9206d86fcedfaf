//! Marketplace browsing commands
//!
//! The CLI rendition of the browse/search page: filtered listing, full-text
//! search, item detail, featured items, and the like toggle.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_page, print_success};
use swaphub_core::{Item, ItemFilters};

use super::listing::ItemRow;
use super::Context;

/// Filter flags shared by `list` and `search`. Flags left unset are omitted
/// from the query string entirely.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Filter by category (tops, bottoms, dresses, ...)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by condition (new, excellent, good, fair)
    #[arg(long)]
    pub condition: Option<String>,

    /// Filter by size
    #[arg(short, long)]
    pub size: Option<String>,

    /// Filter by color
    #[arg(long)]
    pub color: Option<String>,

    /// Minimum point value
    #[arg(long)]
    pub min_points: Option<i64>,

    /// Maximum point value
    #[arg(long)]
    pub max_points: Option<i64>,

    /// Sort order (created_at, -created_at, view_count, like_count, point_value)
    #[arg(short, long)]
    pub ordering: Option<String>,

    /// Page number
    #[arg(short, long)]
    pub page: Option<i64>,

    /// Items per page (max 50)
    #[arg(long)]
    pub page_size: Option<i64>,
}

impl From<FilterArgs> for ItemFilters {
    fn from(args: FilterArgs) -> Self {
        ItemFilters {
            search: None,
            category: args.category,
            condition: args.condition,
            size: args.size,
            color: args.color,
            min_points: args.min_points,
            max_points: args.max_points,
            ordering: args.ordering,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

#[derive(Subcommand)]
pub enum BrowseAction {
    /// List approved, available items
    List {
        /// Text search in title, description, tags, brand
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Advanced search
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show full item detail (counts as a view)
    Show {
        /// Item ID
        id: i64,
    },

    /// Featured items for the landing page
    Featured {
        /// Maximum number of items
        #[arg(short, long)]
        limit: Option<i64>,
    },

    /// Like or unlike an item
    Like {
        /// Item ID
        id: i64,
    },

    /// Show available categories and conditions
    Categories,
}

/// One dropdown choice, tagged with which dropdown it belongs to
#[derive(Debug, Serialize, Tabled)]
struct ChoiceRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Label")]
    label: String,
}

/// Detail row for a single item
#[derive(Debug, Serialize, Tabled)]
struct ItemDetailRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub async fn execute(ctx: &Context, action: BrowseAction) -> Result<()> {
    match action {
        BrowseAction::List { search, filters } => {
            let mut filters = ItemFilters::from(filters);
            filters.search = search;
            let page = ctx.client.list_items(&filters).await?;
            let rows: Vec<ItemRow> = page.results.into_iter().map(ItemRow::from).collect();
            print_page(&rows, &page.pagination, ctx.format, ctx.quiet)?;
            Ok(())
        }

        BrowseAction::Search { query, filters } => {
            let filters = ItemFilters::from(filters);
            let page = ctx.client.search_items(&query, &filters).await?;
            let rows: Vec<ItemRow> = page.results.into_iter().map(ItemRow::from).collect();
            print_page(&rows, &page.pagination, ctx.format, ctx.quiet)?;
            Ok(())
        }

        BrowseAction::Show { id } => {
            let item = ctx.client.get_item(id).await?;
            show_item(ctx, item)
        }

        BrowseAction::Featured { limit } => {
            let items = ctx.client.get_featured_items(limit).await?;
            let rows: Vec<ItemRow> = items.into_iter().map(ItemRow::from).collect();
            print_output(&rows, ctx.format)?;
            Ok(())
        }

        BrowseAction::Like { id } => {
            let response = ctx.client.toggle_like(id).await?;
            // The server count is authoritative; report it verbatim
            let verb = if response.liked { "Liked" } else { "Unliked" };
            print_success(
                &format!("{} item #{} ({} likes)", verb, id, response.like_count),
                ctx.quiet,
            );
            Ok(())
        }

        BrowseAction::Categories => {
            let options = ctx.client.get_categories().await?;
            let rows: Vec<ChoiceRow> = options
                .categories
                .into_iter()
                .map(|c| ChoiceRow {
                    kind: "category".to_string(),
                    value: c.value,
                    label: c.label,
                })
                .chain(options.conditions.into_iter().map(|c| ChoiceRow {
                    kind: "condition".to_string(),
                    value: c.value,
                    label: c.label,
                }))
                .collect();
            print_output(&rows, ctx.format)?;
            Ok(())
        }
    }
}

fn show_item(ctx: &Context, item: Item) -> Result<()> {
    let image_urls: Vec<String> = item
        .images
        .iter()
        .map(|img| ctx.client.config().image_url(Some(&img.image)))
        .collect();

    let rows = vec![
        detail("ID", item.id.to_string()),
        detail("Title", item.title.clone()),
        detail("Description", item.description.clone()),
        detail("Points", item.point_value.to_string()),
        detail("Status", item.status.as_str().to_string()),
        detail("Category", item.category.clone()),
        detail("Condition", item.condition.clone()),
        detail("Size", item.size.clone()),
        detail("Color", item.color.clone()),
        detail("Brand", item.brand.clone()),
        detail("Views", item.view_count.to_string()),
        detail("Likes", item.like_count.to_string()),
        detail(
            "Owner",
            item.owner.as_ref().map(|o| o.username.clone()).unwrap_or_default(),
        ),
        detail("Images", image_urls.join("\n")),
    ];
    print_output(&rows, ctx.format)?;
    Ok(())
}

fn detail(field: &str, value: String) -> ItemDetailRow {
    ItemDetailRow { field: field.to_string(), value }
}
