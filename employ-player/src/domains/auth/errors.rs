//! Session storage errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// No platform data directory could be determined
    #[error("No data directory available for session storage")]
    NoDataDir,

    #[error("Failed to read session file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write session file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupted session data")]
    Corrupted(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
