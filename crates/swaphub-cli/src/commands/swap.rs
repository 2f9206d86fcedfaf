//! Swap request commands
//!
//! Transitions are requested here and confirmed by re-reading the state the
//! server returns; the CLI never marks a swap successful on its own.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_single, print_success};
use swaphub_core::{NewSwap, SwapRequest};

use super::listing::ItemRow;
use super::Context;

#[derive(Subcommand)]
pub enum SwapAction {
    /// List your swap requests, sent and received
    List,

    /// Show one swap request with both items
    Show {
        /// Swap ID
        id: i64,
    },

    /// Propose a swap
    Create {
        /// Your item to offer
        #[arg(short, long)]
        offered: i64,

        /// The item you want
        #[arg(short, long)]
        requested: i64,

        /// Message to the other owner
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Accept a pending swap (you must own the requested item)
    Accept {
        /// Swap ID
        id: i64,

        /// Response message
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Reject a pending swap
    Reject {
        /// Swap ID
        id: i64,

        /// Response message
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Mark an accepted swap as completed
    Complete {
        /// Swap ID
        id: i64,
    },

    /// Cancel a swap you requested
    Cancel {
        /// Swap ID
        id: i64,
    },

    /// Redeem an item with points instead of a swap
    Redeem {
        /// Item ID
        item: i64,

        /// Delivery address
        #[arg(short, long)]
        address: Option<String>,
    },
}

/// Swap row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct SwapRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Requester")]
    pub requester: String,
    #[tabled(rename = "Offered")]
    pub offered: String,
    #[tabled(rename = "Requested")]
    pub requested: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<SwapRequest> for SwapRow {
    fn from(swap: SwapRequest) -> Self {
        Self {
            id: swap.id,
            status: swap.status.as_str().to_string(),
            requester: swap.requester.username,
            offered: format!("#{} {}", swap.offered_item.id, swap.offered_item.title),
            requested: format!("#{} {}", swap.requested_item.id, swap.requested_item.title),
            created: swap.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

pub async fn execute(ctx: &Context, action: SwapAction) -> Result<()> {
    match action {
        SwapAction::List => {
            let swaps = ctx.client.get_my_swaps().await?;
            let rows: Vec<SwapRow> = swaps.into_iter().map(SwapRow::from).collect();
            print_output(&rows, ctx.format)?;
            Ok(())
        }

        SwapAction::Show { id } => {
            let swap = ctx.client.get_swap(id).await?;
            print_single(&SwapRow::from(swap.clone()), ctx.format)?;
            if !ctx.quiet {
                let items = vec![
                    ItemRow::from(swap.offered_item),
                    ItemRow::from(swap.requested_item),
                ];
                print_output(&items, ctx.format)?;
            }
            Ok(())
        }

        SwapAction::Create { offered, requested, message } => {
            let swap = ctx
                .client
                .create_swap(&NewSwap {
                    offered_item: offered,
                    requested_item: requested,
                    message,
                })
                .await?;
            print_success(&format!("Created swap request #{}", swap.id), ctx.quiet);
            Ok(())
        }

        SwapAction::Accept { id, message } => {
            let swap = ctx.client.accept_swap(id, message).await?;
            print_success(
                &format!("Swap #{} is now {}", swap.id, swap.status.as_str()),
                ctx.quiet,
            );
            Ok(())
        }

        SwapAction::Reject { id, message } => {
            let swap = ctx.client.reject_swap(id, message).await?;
            print_success(
                &format!("Swap #{} is now {}", swap.id, swap.status.as_str()),
                ctx.quiet,
            );
            Ok(())
        }

        SwapAction::Complete { id } => {
            let swap = ctx.client.complete_swap(id).await?;
            print_success(
                &format!("Swap #{} is now {}", swap.id, swap.status.as_str()),
                ctx.quiet,
            );
            Ok(())
        }

        SwapAction::Cancel { id } => {
            let swap = ctx.client.cancel_swap(id).await?;
            print_success(
                &format!("Swap #{} is now {}", swap.id, swap.status.as_str()),
                ctx.quiet,
            );
            Ok(())
        }

        SwapAction::Redeem { item, address } => {
            let response = ctx.client.redeem_item(item, address).await?;
            print_success(
                &format!("{} ({} points remaining)", response.message, response.points_remaining),
                ctx.quiet,
            );
            Ok(())
        }
    }
}
