use std::sync::Arc;

use anyhow::{Context, Result};
use employ_core::api::routes::DEFAULT_BASE_URL;
use iced::Task;
use log::{info, warn};

use crate::common::messages::DomainMessage;
use crate::domains::auth::storage::{
    FileSessionStore, MemorySessionStore, SessionStore,
};
use crate::infra::api_client::{ApiClient, normalize_base_url};
use crate::infra::config::Config;
use crate::infra::services::{
    AuthApiAdapter, AuthService, UserAdminApiAdapter, UserAdminService,
};
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: Arc<str>,
    pub api_key: Option<Arc<str>>,
}

impl AppConfig {
    /// Resolves the config file and environment overrides. A default
    /// config file is written on first run.
    pub fn from_environment() -> Self {
        if Config::default_path().is_some_and(|path| !path.exists())
            && let Err(e) = Config::default().save()
        {
            warn!("Could not write default config file: {}", e);
        }
        Self::from_config(Config::load())
    }

    pub fn from_config(config: Config) -> Self {
        let api_url = normalize_base_url(&config.api_url).unwrap_or_else(|e| {
            warn!("{}; falling back to {}", e, DEFAULT_BASE_URL);
            DEFAULT_BASE_URL.to_string()
        });
        Self {
            api_url: Arc::from(api_url),
            api_key: config.api_key.map(Arc::from),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Everything the application state is built from.
#[derive(Clone)]
pub struct Services {
    pub api_client: Arc<ApiClient>,
    pub auth: Arc<dyn AuthService>,
    pub user_admin: Arc<dyn UserAdminService>,
    pub session_store: Arc<dyn SessionStore>,
}

impl Services {
    /// Wires the HTTP adapters and the on-disk session store.
    pub fn connect(config: &AppConfig) -> Result<Self> {
        let api_client = Arc::new(
            ApiClient::new(config.api_url())
                .context("failed to create API client")?
                .with_api_key(config.api_key.as_deref().map(str::to_string)),
        );

        let session_store: Arc<dyn SessionStore> =
            match FileSessionStore::new() {
                Ok(store) => {
                    info!("Session file: {}", store.path().display());
                    Arc::new(store)
                }
                Err(e) => {
                    warn!("{}; sessions will not persist", e);
                    Arc::new(MemorySessionStore::new())
                }
            };

        Ok(Self {
            auth: Arc::new(AuthApiAdapter::new(Arc::clone(&api_client))),
            user_admin: Arc::new(UserAdminApiAdapter::new(Arc::clone(
                &api_client,
            ))),
            api_client,
            session_store,
        })
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("api_client", &self.api_client)
            .field("session_store", &self.session_store)
            .finish_non_exhaustive()
    }
}

pub fn base_state(services: &Services) -> State {
    State::new(
        Arc::clone(&services.api_client),
        Arc::clone(&services.auth),
        Arc::clone(&services.user_admin),
        Arc::clone(&services.session_store),
    )
}

/// Boot logic for the runtime application. Always starts on the login
/// screen.
pub fn boot(services: &Services) -> (State, Task<DomainMessage>) {
    (base_state(services), Task::none())
}
