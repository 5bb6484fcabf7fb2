use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use employ_core::api::routes::utils;
use employ_model::{UserDraft, UserId, UserPage, UserPatch};

use crate::infra::api_client::ApiClient;

#[async_trait]
pub trait UserAdminService: Send + Sync {
    /// One page of users; pages start at 1.
    async fn list_users(&self, page: u32) -> Result<UserPage>;

    async fn update_user(
        &self,
        id: UserId,
        draft: UserDraft,
    ) -> Result<UserPatch>;

    async fn delete_user(&self, id: UserId) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserAdminService for UserAdminApiAdapter {
    async fn list_users(&self, page: u32) -> Result<UserPage> {
        self.client
            .get(&utils::users_page(page))
            .await
            .with_context(|| format!("listing page {page} failed"))
    }

    async fn update_user(
        &self,
        id: UserId,
        draft: UserDraft,
    ) -> Result<UserPatch> {
        self.client
            .put(&utils::user_item(id), &draft)
            .await
            .with_context(|| format!("updating user {id} failed"))
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        self.client
            .delete(&utils::user_item(id))
            .await
            .with_context(|| format!("deleting user {id} failed"))
    }
}
