//! Session persistence
//!
//! The original client kept `{token, user}` in browser localStorage under
//! fixed key names, read synchronously by every call site. Here that global
//! record lives behind the [`SessionStore`] trait so the file-backed store
//! can be swapped for an in-memory one in tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::UserProfile;

/// An authenticated session: bearer token plus the cached user record.
///
/// The client never validates token expiry locally; a stale token simply
/// earns a 401 from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Storage for the current session.
///
/// All methods are synchronous and infallible on read: a missing or corrupt
/// record reads as logged-out.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<Session>;
    fn set(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;

    /// True iff a non-empty token is present. Token validity is irrelevant.
    fn is_authenticated(&self) -> bool {
        self.get().map(|s| !s.token.is_empty()).unwrap_or(false)
    }

    /// Current bearer token, if any.
    fn token(&self) -> Option<String> {
        self.get().map(|s| s.token).filter(|t| !t.is_empty())
    }
}

/// Session file path.
/// Priority: SWAPHUB_SESSION_PATH env var > default app data directory
pub fn default_session_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SWAPHUB_SESSION_PATH") {
        return Ok(PathBuf::from(path));
    }

    let dirs = directories::ProjectDirs::from("com", "swaphub", "SwapHub")
        .ok_or_else(|| Error::config("Could not determine project directories"))?;

    Ok(dirs.data_dir().join("session.json"))
}

/// File-backed session store (JSON, one record).
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Open the store at the default location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(default_session_path()?))
    }

    /// Open the store at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Ignoring corrupt session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store for tests and embedding.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.inner.lock().ok()?.clone()
    }

    fn set(&self, session: &Session) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| Error::session("session store poisoned"))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| Error::session("session store poisoned"))?;
        *guard = None;
        Ok(())
    }
}
