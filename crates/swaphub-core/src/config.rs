//! Client configuration: backend base URL and media URL resolution

/// Default backend API base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Placeholder shown when an item has no image
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x300?text=No+Image";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read the base URL from `SWAPHUB_API_BASE_URL`, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var("SWAPHUB_API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Backend API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full endpoint URL from a path like `/items/42/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Media host: the API base URL with the `/api` suffix stripped.
    pub fn media_base_url(&self) -> String {
        self.base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url)
            .to_string()
    }

    /// Resolve an image reference returned by the backend to a displayable URL.
    ///
    /// Fully-qualified URLs pass through unchanged; `/media/...` paths are
    /// resolved against the media host; bare names are assumed to live under
    /// `/media/`. Missing references resolve to the placeholder.
    pub fn image_url(&self, image: Option<&str>) -> String {
        let image = match image {
            Some(s) if !s.is_empty() => s,
            _ => return PLACEHOLDER_IMAGE_URL.to_string(),
        };

        if image.starts_with("http") {
            return image.to_string();
        }

        let media_base = self.media_base_url();
        if image.starts_with("/media/") {
            format!("{}{}", media_base, image)
        } else {
            format!("{}/media/{}", media_base, image)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://x/api/");
        assert_eq!(config.base_url(), "http://x/api");
        assert_eq!(config.endpoint("/items/"), "http://x/api/items/");
    }

    #[test]
    fn test_media_base_strips_api_suffix() {
        let config = ClientConfig::new("http://x/api");
        assert_eq!(config.media_base_url(), "http://x");
    }

    #[test]
    fn test_image_url_media_path() {
        let config = ClientConfig::new("http://x/api");
        assert_eq!(config.image_url(Some("/media/foo.jpg")), "http://x/media/foo.jpg");
    }

    #[test]
    fn test_image_url_absolute_passthrough() {
        let config = ClientConfig::new("http://x/api");
        assert_eq!(
            config.image_url(Some("https://cdn.example.com/a.png")),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_image_url_bare_name() {
        let config = ClientConfig::new("http://x/api");
        assert_eq!(config.image_url(Some("items/foo.jpg")), "http://x/media/items/foo.jpg");
    }

    #[test]
    fn test_image_url_missing_is_placeholder() {
        let config = ClientConfig::new("http://x/api");
        assert_eq!(config.image_url(None), PLACEHOLDER_IMAGE_URL);
        assert_eq!(config.image_url(Some("")), PLACEHOLDER_IMAGE_URL);
    }
}
