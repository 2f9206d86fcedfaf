//! Unified error handling for swaphub-core

use thiserror::Error;

/// Category of an API failure, derived from the HTTP status code.
///
/// Callers branch on this for UI behavior (re-prompt credentials on
/// `Unauthorized`, show inline field errors on `Validation`, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400 / 422 - the server rejected the payload
    Validation,
    /// 401 / 403 - missing, expired, or insufficient credentials
    Unauthorized,
    /// 404
    NotFound,
    /// 409 - state conflict (e.g. illegal swap transition)
    Conflict,
    /// Any other non-2xx status
    Server,
}

impl ErrorKind {
    /// Map an HTTP status code to an error kind.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            400 | 422 => ErrorKind::Validation,
            401 | 403 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            _ => ErrorKind::Server,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Server => "server",
        }
    }
}

/// Core error type for swaphub-core
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response from the backend. The message is taken verbatim from
    /// the response body when one was provided.
    #[error("{message}")]
    Api { kind: ErrorKind, message: String },

    /// Transport-level failure (connection refused, DNS, timeout, bad TLS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Client-side validation failure; never reached the network
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for swaphub-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a client-side validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a session error
    pub fn session(msg: impl Into<String>) -> Self {
        Error::Session(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Build the error for a non-2xx response.
    ///
    /// `message` is the body-provided message if one could be extracted;
    /// otherwise the message is synthesized as `"<verb> failed: <status> <reason>"`.
    pub fn api(verb: &str, status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| {
            format!(
                "{} failed: {} {}",
                verb,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        });
        Error::Api {
            kind: ErrorKind::from_status(status),
            message,
        }
    }

    /// Error kind for API failures; `None` for local errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
