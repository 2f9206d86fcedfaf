//! HTTP plumbing shared by every resource client
//!
//! One [`ApiClient`] wraps a pooled `reqwest::Client`, the backend base URL,
//! and the injected session store. Resource operations live in the sibling
//! modules (`auth`, `users`, `items`, `swaps`, `admin`) as `impl ApiClient`
//! blocks; they all funnel through the send helpers here so bearer
//! attachment and error translation happen in exactly one place.

use std::sync::Arc;

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::session::{FileSessionStore, SessionStore};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Typed client for the SwapHub REST backend.
pub struct ApiClient {
    pub(crate) http: Client,
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client against the given base URL with an injected session store.
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, config, session })
    }

    /// Create a client from the environment with the file-backed session store.
    pub fn from_env() -> Result<Self> {
        let store = FileSessionStore::open_default()?;
        Self::new(ClientConfig::from_env(), Arc::new(store))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// True iff a non-empty token is stored. Pure, synchronous, no network.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Clear the stored token and user record. No server call is made.
    pub fn logout(&self) -> Result<()> {
        self.session.clear()
    }

    /// Start a request to `path`, attaching the bearer token when present.
    ///
    /// Absence of a token is not an error: the request goes out anonymous
    /// and the server answers 401 where auth was required.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request and decode a JSON body. `verb` names the operation for
    /// synthesized error messages, e.g. `"fetch items"`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        verb: &str,
    ) -> Result<T> {
        let response = builder.send().await?;
        let response = Self::check(response, verb).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send a request that answers with no meaningful body (e.g. DELETE -> 204).
    pub(crate) async fn send_no_content(&self, builder: RequestBuilder, verb: &str) -> Result<()> {
        let response = builder.send().await?;
        Self::check(response, verb).await?;
        Ok(())
    }

    /// Translate a non-2xx response into [`Error::Api`].
    async fn check(response: Response, verb: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        log::debug!("{} failed with status {}", verb, status);
        Err(Error::api(verb, status, message))
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend is inconsistent: `message`, `error`, and `detail` all occur.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error", "detail"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            return Some(msg.to_string());
        }
    }
    None
}

/// Split out so the translation rule is testable without a live server.
#[allow(dead_code)]
pub(crate) fn error_for_body(verb: &str, status: StatusCode, body: &str) -> Error {
    Error::api(verb, status, extract_message(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_extract_message_variants() {
        assert_eq!(extract_message(r#"{"message": "X"}"#).as_deref(), Some("X"));
        assert_eq!(extract_message(r#"{"error": "Y"}"#).as_deref(), Some("Y"));
        assert_eq!(extract_message(r#"{"detail": "Z"}"#).as_deref(), Some("Z"));
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(r#"{"fields": {"title": "required"}}"#), None);
    }

    #[test]
    fn test_error_for_body_prefers_body_message() {
        let err = error_for_body("create swap", StatusCode::CONFLICT, r#"{"message": "Item is no longer available"}"#);
        assert_eq!(err.to_string(), "Item is no longer available");
        assert_eq!(err.kind(), Some(ErrorKind::Conflict));
    }

    #[test]
    fn test_error_for_body_synthesizes_without_message() {
        let err = error_for_body("update item", StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "update item failed: 500 Internal Server Error");
        assert_eq!(err.kind(), Some(ErrorKind::Server));
    }

    #[test]
    fn test_client_construction_and_auth_state() {
        let store = Arc::new(MemorySessionStore::new());
        let client = ApiClient::new(ClientConfig::new("http://x/api"), store).unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.config().base_url(), "http://x/api");
    }
}
