//! Listing command types

use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use swaphub_core::Item;

#[derive(Subcommand)]
pub enum ListingAction {
    /// List your own items, regardless of status
    Mine,

    /// Create a new listing
    Add {
        /// Listing title
        #[arg(short, long)]
        title: String,

        /// Description
        #[arg(short = 'D', long)]
        description: String,

        /// Point value (1-100)
        #[arg(short, long)]
        points: i64,

        /// Category (see `swaphub browse categories`)
        #[arg(short, long)]
        category: String,

        /// Condition (new, excellent, good, fair)
        #[arg(long, default_value = "good")]
        condition: String,

        /// Size (s, m, l, 32, ...)
        #[arg(short, long)]
        size: String,

        /// Color
        #[arg(long, default_value = "")]
        color: String,

        /// Brand
        #[arg(short, long, default_value = "")]
        brand: String,

        /// Image file; repeat for multiple (1-5, max 5MB each)
        #[arg(short, long = "image", required = true)]
        image: Vec<PathBuf>,
    },

    /// Update an existing listing
    Update {
        /// Item ID
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,

        /// New point value
        #[arg(short, long)]
        points: Option<i64>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New condition
        #[arg(long)]
        condition: Option<String>,

        /// New size
        #[arg(short, long)]
        size: Option<String>,

        /// New color
        #[arg(long)]
        color: Option<String>,

        /// New brand
        #[arg(short, long)]
        brand: Option<String>,

        /// Replacement images; when given, all fields above are resubmitted
        /// as a multipart form
        #[arg(long = "image")]
        image: Vec<PathBuf>,
    },

    /// Delete a listing
    Delete {
        /// Item ID
        id: i64,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Item row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ItemRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Points")]
    pub point_value: i64,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Cond")]
    pub condition: String,
    #[tabled(rename = "Views")]
    pub view_count: i64,
    #[tabled(rename = "Likes")]
    pub like_count: i64,
    #[tabled(rename = "Owner")]
    pub owner: String,
}

impl From<Item> for ItemRow {
    fn from(item: Item) -> Self {
        let mut status = item.status.as_str().to_string();
        if item.is_flagged {
            status.push_str(" (flagged)");
        } else if !item.is_approved {
            status.push_str(" (unapproved)");
        }
        Self {
            id: item.id,
            title: truncate(&item.title, 40),
            point_value: item.point_value,
            status,
            category: item.category,
            condition: item.condition,
            view_count: item.view_count,
            like_count: item.like_count,
            owner: item.owner.map(|o| o.username).unwrap_or_default(),
        }
    }
}

/// Truncate a string for table display
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("jacket", 40), "jacket");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = "x".repeat(50);
        let out = truncate(&long, 40);
        assert_eq!(out.chars().count(), 40);
        assert!(out.ends_with("..."));
    }
}
