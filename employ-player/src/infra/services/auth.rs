use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use employ_core::ApiError;
use employ_core::api::routes::v1;
use employ_model::{LoginRequest, LoginResponse, SessionToken};

use crate::infra::api_client::ApiClient;

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session token.
    async fn login(&self, request: LoginRequest) -> Result<SessionToken>;
}

#[derive(Debug, Clone)]
pub struct AuthApiAdapter {
    client: Arc<ApiClient>,
}

impl AuthApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for AuthApiAdapter {
    async fn login(&self, request: LoginRequest) -> Result<SessionToken> {
        let response: LoginResponse = self
            .client
            .post(v1::auth::LOGIN, &request)
            .await
            .context("login request failed")?;

        if let Some(error) = response.error.as_deref() {
            log::debug!("login response carried error: {}", error);
        }
        response
            .into_token()
            .ok_or(ApiError::MissingToken)
            .map_err(anyhow::Error::from)
    }
}
