//! Moderation operations (admin accounts only)
//!
//! Approve/flag state lives on the item itself, so moderation writes go
//! through the normal item-update path as JSON patches; only the report
//! listing has a dedicated endpoint.

use reqwest::Method;

use crate::error::Result;
use crate::models::{Item, ItemPatch, MaybeWrapped, ReportedItem};

use super::client::ApiClient;

impl ApiClient {
    /// Every report filed against a listing. Non-admin callers get a 403.
    pub async fn get_reported_items(&self) -> Result<Vec<ReportedItem>> {
        let wrapped: MaybeWrapped<ReportedItem> = self
            .send_json(
                self.request(Method::GET, "/admin/reported/items"),
                "fetch reported items",
            )
            .await?;
        Ok(wrapped.into_vec())
    }

    /// Approve a listing for public browsing.
    pub async fn approve_item(&self, id: i64) -> Result<Item> {
        self.patch_item(id, ItemPatch { is_approved: Some(true), ..Default::default() })
            .await
    }

    /// Flag a listing and pull it from public browsing.
    pub async fn flag_item(&self, id: i64) -> Result<Item> {
        self.patch_item(
            id,
            ItemPatch {
                is_flagged: Some(true),
                is_approved: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    /// Clear a flag.
    pub async fn unflag_item(&self, id: i64) -> Result<Item> {
        self.patch_item(id, ItemPatch { is_flagged: Some(false), ..Default::default() })
            .await
    }
}
