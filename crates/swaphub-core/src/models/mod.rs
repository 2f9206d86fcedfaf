//! Data models for the SwapHub marketplace API
//!
//! Wire shapes mirror the backend's snake_case JSON. Request payloads live
//! here too so the resource clients stay thin transport.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current user's profile, including marketplace stats.
///
/// The points balance is server-authoritative: it is never incremented
/// locally, only replaced wholesale by a profile refetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub points: i64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    pub date_joined: DateTime<Utc>,
    #[serde(default)]
    pub total_items: i64,
    #[serde(default)]
    pub items_swapped: i64,
    #[serde(default)]
    pub active_swaps: i64,
    #[serde(default)]
    pub total_likes_received: i64,
}

/// Abbreviated user info embedded in items and swaps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Listing lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Available,
    Pending,
    Swapped,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Pending => "pending",
            ItemStatus::Swapped => "swapped",
        }
    }
}

/// A single uploaded image belonging to an item.
///
/// The `image` field may be a relative `/media/...` path; resolve it with
/// [`crate::ClientConfig::image_url`] before display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemImage {
    pub image: String,
}

/// A listing offered for swap, priced in points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub point_value: i64,
    #[serde(default)]
    pub images: Vec<ItemImage>,
    pub status: ItemStatus,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub category: String,
    pub condition: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_flagged: bool,
    #[serde(default)]
    pub owner: Option<UserSummary>,
}

/// Swap request status; transitions are one-way and server-driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Completed,
    Rejected,
    Cancelled,
}

impl SwapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Accepted => "accepted",
            SwapStatus::Completed => "completed",
            SwapStatus::Rejected => "rejected",
            SwapStatus::Cancelled => "cancelled",
        }
    }
}

/// A proposed exchange between two users' items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRequest {
    pub id: i64,
    pub requester: UserSummary,
    pub offered_item: Item,
    pub requested_item: Item,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub response_message: Option<String>,
}

/// Dashboard aggregate snapshot, recomputed server-side on demand.
///
/// `successful_swaps` and `active_negotiations` are absent from older backend
/// responses and default to zero there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_points: i64,
    #[serde(default)]
    pub points_earned_this_month: i64,
    pub total_items: i64,
    #[serde(default)]
    pub pending_approval: i64,
    #[serde(default)]
    pub available_items: i64,
    #[serde(default)]
    pub swapped_items: i64,
    #[serde(default)]
    pub total_views: i64,
    #[serde(default)]
    pub total_likes: i64,
    #[serde(default)]
    pub profile_views: i64,
    #[serde(default)]
    pub swaps_requested: i64,
    #[serde(default)]
    pub swaps_received: i64,
    #[serde(default)]
    pub successful_swaps: i64,
    #[serde(default)]
    pub active_negotiations: i64,
    #[serde(default)]
    pub new_likes_this_week: i64,
    #[serde(default)]
    pub new_views_this_week: i64,
}

/// Platform-wide statistics for landing surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_users: i64,
    pub total_items: i64,
    pub total_swaps: i64,
    #[serde(default)]
    pub items_this_month: i64,
    #[serde(default)]
    pub swaps_this_month: i64,
}

/// An entry in the user's recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub item: Option<Item>,
    #[serde(default)]
    pub swap: Option<SwapRequest>,
}

/// A moderation report against a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedItem {
    pub id: i64,
    pub item: Item,
    pub reported_by: UserSummary,
    #[serde(default)]
    pub reason: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_by: Option<UserSummary>,
}

/// Result of a like toggle; the server count is authoritative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: i64,
}

/// Result of a point redemption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub points_remaining: i64,
}

/// A value/label pair for form dropdowns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Category and condition choices served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOptions {
    pub categories: Vec<ChoiceOption>,
    pub conditions: Vec<ChoiceOption>,
}

/// Canonical pagination metadata.
///
/// The backend has shipped two shapes over time (DRF top-level count/next/
/// previous, and a nested `pagination` object with page numbers); both
/// normalize into this one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub current_page: i64,
    pub total_pages: i64,
}

/// One page of a list endpoint's results
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub pagination: Pagination,
}

/// Raw wire form of a paginated response, accepting either pagination shape.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct RawPage<T> {
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default)]
    pub pagination: Option<RawPagination>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub current_page: Option<i64>,
    #[serde(default)]
    pub total_pages: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPagination {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub current_page: Option<i64>,
    #[serde(default)]
    pub total_pages: Option<i64>,
}

impl<T> RawPage<T> {
    pub(crate) fn normalize(self) -> Page<T> {
        let nested = self.pagination.unwrap_or_default();
        let count = nested
            .count
            .or(self.count)
            .unwrap_or(self.results.len() as i64);
        Page {
            results: self.results,
            pagination: Pagination {
                count,
                next: nested.next.or(self.next),
                previous: nested.previous.or(self.previous),
                current_page: nested.current_page.or(self.current_page).unwrap_or(1),
                total_pages: nested.total_pages.or(self.total_pages).unwrap_or(1),
            },
        }
    }
}

/// List endpoints are inconsistent about wrapping: some return `{results}`,
/// others a bare array. Both decode through this helper.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybeWrapped<T> {
    Wrapped { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> MaybeWrapped<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            MaybeWrapped::Wrapped { results } => results,
            MaybeWrapped::Plain(items) => items,
        }
    }
}

/// New account payload. The confirmation field is checked client-side and
/// never transmitted.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing)]
    pub password_confirm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Login payload; the backend accepts a username or an email here
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Partial profile update
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// Partial JSON item update (owner edits and moderation patches)
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flagged: Option<bool>,
}

/// Maximum images per listing
pub const MAX_IMAGES_PER_LISTING: usize = 5;
/// Maximum size of a single image upload (5MB)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
/// Point value bounds for a listing
pub const MIN_POINT_VALUE: i64 = 1;
pub const MAX_POINT_VALUE: i64 = 100;

/// A pending image upload held in memory.
///
/// The original client held these as browser blob references that had to be
/// revoked when removed from the pending set; here the bytes are owned and
/// dropped with the attachment.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read an attachment from disk, inferring the MIME type from the
    /// file extension.
    pub fn from_path(path: &std::path::Path) -> crate::error::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = match path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        };
        Ok(Self::new(file_name, mime_type, bytes))
    }

    /// Check the per-file upload constraints.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::Error;
        if !self.mime_type.starts_with("image/") {
            return Err(Error::validation(format!(
                "{}: only image files can be uploaded",
                self.file_name
            )));
        }
        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(Error::validation(format!(
                "{}: image exceeds the 5MB limit",
                self.file_name
            )));
        }
        Ok(())
    }
}

/// Payload for creating a listing (or replacing one via multipart update).
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub point_value: i64,
    pub category: String,
    pub condition: String,
    pub size: String,
    pub color: String,
    pub brand: String,
    pub images: Vec<ImageAttachment>,
}

impl NewListing {
    /// Image-set constraints shared by create and multipart update.
    pub fn validate_images(&self) -> crate::error::Result<()> {
        use crate::error::Error;
        if self.images.len() > MAX_IMAGES_PER_LISTING {
            return Err(Error::validation(format!(
                "At most {} images per listing",
                MAX_IMAGES_PER_LISTING
            )));
        }
        for image in &self.images {
            image.validate()?;
        }
        Ok(())
    }

    /// Text and point-value constraints shared by create and edit.
    pub fn validate_fields(&self) -> crate::error::Result<()> {
        use crate::error::Error;
        if self.title.trim().is_empty() {
            return Err(Error::validation("Title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(Error::validation("Description is required"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::validation("Category is required"));
        }
        if self.condition.trim().is_empty() {
            return Err(Error::validation("Condition is required"));
        }
        if self.size.trim().is_empty() {
            return Err(Error::validation("Size is required"));
        }
        if !(MIN_POINT_VALUE..=MAX_POINT_VALUE).contains(&self.point_value) {
            return Err(Error::validation(format!(
                "Point value must be between {} and {}",
                MIN_POINT_VALUE, MAX_POINT_VALUE
            )));
        }
        Ok(())
    }

    /// Full constraint check for creation. Runs before any network I/O.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::Error;
        self.validate_fields()?;
        if self.images.is_empty() {
            return Err(Error::validation("At least one image is required"));
        }
        self.validate_images()
    }
}

/// How to transmit an item update.
///
/// The original client branched on `instanceof FormData`; the tagged union
/// makes the choice explicit at the call site.
#[derive(Debug, Clone)]
pub enum ItemUpdate {
    /// Partial field update as a JSON PATCH
    Json(ItemPatch),
    /// Full form re-submission including images
    Multipart(NewListing),
}

/// New swap request payload
#[derive(Debug, Clone, Serialize)]
pub struct NewSwap {
    pub offered_item: i64,
    pub requested_item: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Filter set for item listing/search. Unset fields are omitted from the
/// query string entirely.
#[derive(Debug, Clone, Default)]
pub struct ItemFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub min_points: Option<i64>,
    pub max_points: Option<i64>,
    pub ordering: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ItemFilters {
    /// Query pairs for the set fields only.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.search {
            pairs.push(("search", v.clone()));
        }
        if let Some(v) = &self.category {
            pairs.push(("category", v.clone()));
        }
        if let Some(v) = &self.condition {
            pairs.push(("condition", v.clone()));
        }
        if let Some(v) = &self.size {
            pairs.push(("size", v.clone()));
        }
        if let Some(v) = &self.color {
            pairs.push(("color", v.clone()));
        }
        if let Some(v) = self.min_points {
            pairs.push(("min_points", v.to_string()));
        }
        if let Some(v) = self.max_points {
            pairs.push(("max_points", v.to_string()));
        }
        if let Some(v) = &self.ordering {
            pairs.push(("ordering", v.clone()));
        }
        if let Some(v) = self.page {
            pairs.push(("page", v.to_string()));
        }
        if let Some(v) = self.page_size {
            pairs.push(("page_size", v.to_string()));
        }
        pairs
    }
}
