//! Credential exchange payloads and the session token.

use crate::error::{ModelError, Result};

/// Body of the login request.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Body of the login response. The server sends `error` instead of `token`
/// when it rejects the credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoginResponse {
    pub token: Option<String>,
    pub error: Option<String>,
}

impl LoginResponse {
    /// Extracts a usable token, if any.
    pub fn into_token(self) -> Option<SessionToken> {
        self.token.and_then(|raw| SessionToken::new(raw).ok())
    }
}

/// Opaque credential returned by the authentication endpoint.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::EmptyToken);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tokens_are_rejected() {
        assert_eq!(SessionToken::new("  "), Err(ModelError::EmptyToken));
        assert!(SessionToken::new("QpwL5tke4Pnpja7X4").is_ok());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let token = SessionToken::new("QpwL5tke4Pnpja7X4").unwrap();
        assert_eq!(format!("{token:?}"), "SessionToken(***)");

        let request = LoginRequest::new("eve@x.com", "hunter2");
        assert!(!format!("{request:?}").contains("hunter2"));
    }

    #[test]
    fn response_without_token_yields_none() {
        let response = LoginResponse {
            token: None,
            error: Some("Missing password".into()),
        };
        assert!(response.into_token().is_none());

        let blank = LoginResponse {
            token: Some(String::new()),
            error: None,
        };
        assert!(blank.into_token().is_none());
    }
}
