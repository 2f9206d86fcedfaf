//! Moderation commands (admin accounts only)

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_success};
use swaphub_core::ReportedItem;

use super::listing::truncate;
use super::Context;

#[derive(Subcommand)]
pub enum AdminAction {
    /// List every report filed against a listing
    Reported,

    /// Approve a listing for public browsing
    Approve {
        /// Item ID
        id: i64,
    },

    /// Flag a listing and pull it from public browsing
    Flag {
        /// Item ID
        id: i64,
    },

    /// Clear a listing's flag
    Unflag {
        /// Item ID
        id: i64,
    },
}

/// Report row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "Report")]
    pub id: i64,
    #[tabled(rename = "Item")]
    pub item: String,
    #[tabled(rename = "Reported by")]
    pub reported_by: String,
    #[tabled(rename = "Reason")]
    pub reason: String,
    #[tabled(rename = "Reviewed")]
    pub reviewed: String,
}

impl From<ReportedItem> for ReportRow {
    fn from(report: ReportedItem) -> Self {
        Self {
            id: report.id,
            item: format!("#{} {}", report.item.id, truncate(&report.item.title, 30)),
            reported_by: report.reported_by.username,
            reason: truncate(&report.reason, 40),
            reviewed: report
                .reviewed_by
                .map(|u| u.username)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub async fn execute(ctx: &Context, action: AdminAction) -> Result<()> {
    match action {
        AdminAction::Reported => {
            let reports = ctx.client.get_reported_items().await?;
            let rows: Vec<ReportRow> = reports.into_iter().map(ReportRow::from).collect();
            print_output(&rows, ctx.format)?;
            Ok(())
        }

        AdminAction::Approve { id } => {
            let item = ctx.client.approve_item(id).await?;
            print_success(&format!("Approved listing #{}", item.id), ctx.quiet);
            Ok(())
        }

        AdminAction::Flag { id } => {
            let item = ctx.client.flag_item(id).await?;
            print_success(&format!("Flagged listing #{}", item.id), ctx.quiet);
            Ok(())
        }

        AdminAction::Unflag { id } => {
            let item = ctx.client.unflag_item(id).await?;
            print_success(&format!("Cleared flag on listing #{}", item.id), ctx.quiet);
            Ok(())
        }
    }
}
