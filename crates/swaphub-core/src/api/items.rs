//! Listing operations: browse, create, edit, engagement

use reqwest::multipart;
use reqwest::Method;

use crate::error::Result;
use crate::models::{
    CategoryOptions, Item, ItemFilters, ItemPatch, ItemUpdate, LikeResponse, MaybeWrapped,
    NewListing, Page, PlatformStats, RawPage,
};

use super::client::ApiClient;

impl ApiClient {
    /// Browse approved, available items with optional filters.
    ///
    /// Unset filters never reach the query string.
    pub async fn list_items(&self, filters: &ItemFilters) -> Result<Page<Item>> {
        let raw: RawPage<Item> = self
            .send_json(
                self.request(Method::GET, "/items/").query(&filters.to_query()),
                "fetch items",
            )
            .await?;
        Ok(raw.normalize())
    }

    /// Full-text search across titles, descriptions, tags, and brands.
    pub async fn search_items(&self, query: &str, filters: &ItemFilters) -> Result<Page<Item>> {
        let raw: RawPage<Item> = self
            .send_json(
                self.request(Method::GET, "/items/search/")
                    .query(&[("q", query)])
                    .query(&filters.to_query()),
                "search items",
            )
            .await?;
        Ok(raw.normalize())
    }

    /// Curated items for landing surfaces.
    pub async fn get_featured_items(&self, limit: Option<i64>) -> Result<Vec<Item>> {
        let mut builder = self.request(Method::GET, "/items/featured/");
        if let Some(limit) = limit {
            builder = builder.query(&[("limit", limit)]);
        }
        let wrapped: MaybeWrapped<Item> = self.send_json(builder, "fetch featured items").await?;
        Ok(wrapped.into_vec())
    }

    /// The current user's own listings, regardless of status.
    pub async fn get_my_items(&self) -> Result<Vec<Item>> {
        let wrapped: MaybeWrapped<Item> = self
            .send_json(self.request(Method::GET, "/items/my/"), "fetch my items")
            .await?;
        Ok(wrapped.into_vec())
    }

    /// Item detail. The server increments the view count on this call.
    pub async fn get_item(&self, id: i64) -> Result<Item> {
        self.send_json(
            self.request(Method::GET, &format!("/items/{}/", id)),
            "fetch item",
        )
        .await
    }

    /// Create a listing via multipart upload.
    ///
    /// Constraints (≥1 image, ≤5 images, ≤5MB each, `image/*` MIME, point
    /// value 1-100, required text fields) are checked before any network I/O.
    pub async fn create_item(&self, listing: &NewListing) -> Result<Item> {
        listing.validate()?;
        let form = listing_form(listing)?;
        self.send_json(
            self.request(Method::POST, "/items/").multipart(form),
            "create item",
        )
        .await
    }

    /// Update a listing, either as a JSON patch or a multipart re-submission.
    pub async fn update_item(&self, id: i64, update: &ItemUpdate) -> Result<Item> {
        let path = format!("/items/{}/", id);
        match update {
            ItemUpdate::Json(patch) => {
                self.send_json(self.request(Method::PATCH, &path).json(patch), "update item")
                    .await
            }
            ItemUpdate::Multipart(listing) => {
                listing.validate_images()?;
                let form = listing_form(listing)?;
                self.send_json(
                    self.request(Method::PATCH, &path).multipart(form),
                    "update item",
                )
                .await
            }
        }
    }

    /// Delete a listing (owner or moderator). Server answers 204.
    pub async fn delete_item(&self, id: i64) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/items/{}/", id)),
            "delete item",
        )
        .await
    }

    /// Toggle like status. The returned count is the server's and is used
    /// verbatim; no local increment/decrement arithmetic happens anywhere.
    pub async fn toggle_like(&self, id: i64) -> Result<LikeResponse> {
        self.send_json(
            self.request(Method::POST, &format!("/items/{}/like/", id)),
            "toggle like",
        )
        .await
    }

    /// Category and condition choices for form dropdowns.
    pub async fn get_categories(&self) -> Result<CategoryOptions> {
        self.send_json(
            self.request(Method::GET, "/items/categories/"),
            "fetch categories",
        )
        .await
    }

    /// Platform-wide statistics.
    pub async fn get_platform_stats(&self) -> Result<PlatformStats> {
        self.send_json(
            self.request(Method::GET, "/items/stats/"),
            "fetch platform stats",
        )
        .await
    }

    /// Convenience wrapper for moderation patches.
    pub(crate) async fn patch_item(&self, id: i64, patch: ItemPatch) -> Result<Item> {
        self.update_item(id, &ItemUpdate::Json(patch)).await
    }
}

/// Build the multipart form for a listing; images go out as repeated
/// `images` parts.
fn listing_form(listing: &NewListing) -> Result<multipart::Form> {
    let mut form = multipart::Form::new()
        .text("title", listing.title.clone())
        .text("description", listing.description.clone())
        .text("point_value", listing.point_value.to_string())
        .text("category", listing.category.clone())
        .text("condition", listing.condition.clone())
        .text("size", listing.size.clone())
        .text("color", listing.color.clone())
        .text("brand", listing.brand.clone());

    for image in &listing.images {
        let part = multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;
        form = form.part("images", part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;
    use crate::models::{ImageAttachment, MAX_IMAGE_BYTES};
    use crate::session::MemorySessionStore;
    use crate::ClientConfig;

    fn offline_client() -> ApiClient {
        // Nothing listens here; rejections below must happen before any I/O
        ApiClient::new(
            ClientConfig::new("http://127.0.0.1:9/api"),
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap()
    }

    fn valid_listing() -> NewListing {
        NewListing {
            title: "Denim jacket".to_string(),
            description: "Lightly worn".to_string(),
            point_value: 25,
            category: "tops".to_string(),
            condition: "good".to_string(),
            size: "m".to_string(),
            color: "blue".to_string(),
            brand: String::new(),
            images: vec![ImageAttachment::new("a.jpg", "image/jpeg", vec![0u8; 64])],
        }
    }

    #[tokio::test]
    async fn test_create_rejects_missing_images_without_network() {
        let client = offline_client();
        let mut listing = valid_listing();
        listing.images.clear();
        let err = client.create_item(&listing).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_oversized_image_without_network() {
        let client = offline_client();
        let mut listing = valid_listing();
        listing.images = vec![ImageAttachment::new(
            "big.jpg",
            "image/jpeg",
            vec![0u8; MAX_IMAGE_BYTES + 1],
        )];
        let err = client.create_item(&listing).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_non_image_mime_without_network() {
        let client = offline_client();
        let mut listing = valid_listing();
        listing.images = vec![ImageAttachment::new("scan.pdf", "application/pdf", vec![0u8; 64])];
        let err = client.create_item(&listing).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_multipart_update_checks_image_constraints() {
        let client = offline_client();
        let mut listing = valid_listing();
        listing.images = vec![ImageAttachment::new("notes.txt", "text/plain", vec![0u8; 64])];
        let err = client
            .update_item(1, &ItemUpdate::Multipart(listing))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_listing_form_has_repeated_image_parts() {
        let mut listing = valid_listing();
        listing
            .images
            .push(ImageAttachment::new("b.png", "image/png", vec![0u8; 64]));
        // Form construction itself must accept multiple image parts
        assert!(listing_form(&listing).is_ok());
    }
}
