//! Dashboard commands
//!
//! The CLI rendition of the dashboard page: stats snapshot, recent activity,
//! and liked items.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;
use swaphub_core::DashboardStats;

use super::listing::ItemRow;
use super::Context;

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Points, item counts, and engagement totals
    Stats,

    /// Recent activity feed
    Activity,

    /// Items you have liked
    Liked,
}

/// Stat row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct StatRow {
    #[tabled(rename = "Stat")]
    pub stat: String,
    #[tabled(rename = "Value")]
    pub value: i64,
}

fn stat_rows(stats: &DashboardStats) -> Vec<StatRow> {
    let pairs = [
        ("Total points", stats.total_points),
        ("Points earned this month", stats.points_earned_this_month),
        ("Total items", stats.total_items),
        ("Pending approval", stats.pending_approval),
        ("Available items", stats.available_items),
        ("Swapped items", stats.swapped_items),
        ("Total views", stats.total_views),
        ("Total likes", stats.total_likes),
        ("Swaps requested", stats.swaps_requested),
        ("Swaps received", stats.swaps_received),
        ("Successful swaps", stats.successful_swaps),
        ("Active negotiations", stats.active_negotiations),
    ];
    pairs
        .into_iter()
        .map(|(stat, value)| StatRow { stat: stat.to_string(), value })
        .collect()
}

/// Activity row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ActivityRow {
    #[tabled(rename = "When")]
    pub when: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Message")]
    pub message: String,
}

pub async fn execute(ctx: &Context, action: DashboardAction) -> Result<()> {
    match action {
        DashboardAction::Stats => {
            let stats = ctx.client.get_dashboard_stats().await?;
            print_output(&stat_rows(&stats), ctx.format)?;
            Ok(())
        }

        DashboardAction::Activity => {
            let activity = ctx.client.get_my_activity().await?;
            let rows: Vec<ActivityRow> = activity
                .into_iter()
                .map(|entry| ActivityRow {
                    when: entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                    kind: entry.kind,
                    message: entry.message,
                })
                .collect();
            print_output(&rows, ctx.format)?;
            Ok(())
        }

        DashboardAction::Liked => {
            let items = ctx.client.get_liked_items().await?;
            let rows: Vec<ItemRow> = items.into_iter().map(ItemRow::from).collect();
            print_output(&rows, ctx.format)?;
            Ok(())
        }
    }
}
