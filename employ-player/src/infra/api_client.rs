use std::sync::Arc;
use std::time::Duration;

use employ_core::api::routes::API_KEY_HEADER;
use employ_core::{ApiError, ApiResult};
use employ_model::SessionToken;
use log::{debug, info, warn};
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the user API with bearer-token support.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    api_key: Option<String>,
    token_store: Arc<RwLock<Option<SessionToken>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("has_token", &self.token_store.read().is_some())
            .finish()
    }
}

/// Trims whitespace and trailing slashes and adds `https://` when the
/// scheme is missing.
pub fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

    url::Url::parse(&with_scheme)
        .map_err(|e| ApiError::InvalidBaseUrl(format!("{raw}: {e}")))?;

    if with_scheme != raw {
        debug!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    Ok(with_scheme)
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        info!("[ApiClient] Using base URL: {}", base_url);

        Ok(Self {
            client,
            base_url,
            api_key: None,
            token_store: Arc::new(RwLock::new(None)),
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Joins an API path onto the base URL.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    pub fn set_token(&self, token: Option<SessionToken>) {
        *self.token_store.write() = token;
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.token_store.read().clone()
    }

    /// Adds the bearer token and API key headers, when present.
    fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = match self.api_key.as_deref() {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        };
        match self.token_store.read().as_ref() {
            Some(token) => builder.bearer_auth(token.as_str()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = self
            .build_request(builder)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if status == StatusCode::UNAUTHORIZED {
            warn!("[ApiClient] Unauthorized response, token rejected");
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] GET {}", url);
        let response = self.send(self.client.get(&url)).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] POST {}", url);
        let response = self.send(self.client.post(&url).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] PUT {}", url);
        let response = self.send(self.client.put(&url).json(body)).await?;
        Self::decode(response).await
    }

    /// DELETE; any success status counts, the body is ignored.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.build_url(path);
        debug!("[ApiClient] DELETE {}", url);
        self.send(self.client.delete(&url)).await.map(|_| ())
    }
}
