//! Error taxonomy for remote calls.
//!
//! The user-facing layer collapses all of these into a generic error
//! notification; the variants exist for logging and tests.

use thiserror::Error;

/// Failure of a call against the remote API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    #[allow(missing_docs)]
    Status { status: u16, body: String },

    /// Body could not be decoded into the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Login answered successfully but without a token.
    #[error("No token in login response")]
    MissingToken,

    /// Configured base URL does not parse.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[allow(missing_docs)]
pub type ApiResult<T> = Result<T, ApiError>;
