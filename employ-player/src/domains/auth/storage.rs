//! Local storage for the session token
//!
//! The token lives under a fixed key in a small JSON key/value file inside
//! the platform data directory. There is no expiry handling; a stored token
//! is used until it is cleared.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use employ_model::SessionToken;
use log::{debug, warn};
use parking_lot::Mutex;

use super::errors::{SessionError, SessionResult};

pub(crate) const SESSION_FILE: &str = "session.json";
pub const TOKEN_KEY: &str = "token";

/// Where the session token is kept between runs.
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    fn load(&self) -> SessionResult<Option<SessionToken>>;

    fn save(&self, token: &SessionToken) -> SessionResult<()>;

    fn clear(&self) -> SessionResult<()>;
}

/// File-backed store, `<data_dir>/session.json`.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new() -> SessionResult<Self> {
        let dirs = ProjectDirs::from("", "employ", "employ-player")
            .ok_or(SessionError::NoDataDir)?;
        Ok(Self::at(dirs.data_dir().join(SESSION_FILE)))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> SessionResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            SessionError::Read {
                path: self.path.clone(),
                source,
            }
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Entries to rewrite; an unreadable file starts over empty.
    fn entries_for_update(&self) -> BTreeMap<String, String> {
        self.read_entries().unwrap_or_else(|e| {
            warn!(
                "Replacing unreadable session file {}: {}",
                self.path.display(),
                e
            );
            BTreeMap::new()
        })
    }

    fn write_entries(
        &self,
        entries: &BTreeMap<String, String>,
    ) -> SessionResult<()> {
        let write_err = |source| SessionError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content).map_err(write_err)
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SessionResult<Option<SessionToken>> {
        let entries = self.read_entries()?;
        let token = entries.get(TOKEN_KEY).and_then(|raw| {
            SessionToken::new(raw.clone())
                .inspect_err(|e| warn!("Ignoring stored token: {}", e))
                .ok()
        });
        debug!(
            "Loaded session from {} (token present: {})",
            self.path.display(),
            token.is_some()
        );
        Ok(token)
    }

    fn save(&self, token: &SessionToken) -> SessionResult<()> {
        // Keep whatever else is in the file.
        let mut entries = self.entries_for_update();
        entries.insert(TOKEN_KEY.to_string(), token.as_str().to_string());
        self.write_entries(&entries)?;
        debug!("Session token stored at {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        match self.read_entries() {
            Ok(mut entries) => {
                if entries.remove(TOKEN_KEY).is_some() {
                    self.write_entries(&entries)?;
                }
                Ok(())
            }
            Err(e) => {
                warn!(
                    "Resetting unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                self.write_entries(&BTreeMap::new())
            }
        }
    }
}

/// In-process store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> SessionResult<Option<SessionToken>> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &SessionToken) -> SessionResult<()> {
        *self.token.lock() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        *self.token.lock() = None;
        Ok(())
    }
}
