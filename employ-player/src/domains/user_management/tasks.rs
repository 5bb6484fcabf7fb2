//! Remote calls behind the roster commands.
//!
//! Errors are flattened to strings so results can travel inside messages.

use std::sync::Arc;

use employ_core::{DeleteCommand, UpdateCommand};
use employ_model::{UserPage, UserPatch};

use crate::infra::services::UserAdminService;

pub async fn fetch_page(
    service: Arc<dyn UserAdminService>,
    page: u32,
) -> Result<UserPage, String> {
    service.list_users(page).await.map_err(|e| format!("{e:#}"))
}

pub async fn update_user(
    service: Arc<dyn UserAdminService>,
    command: UpdateCommand,
) -> Result<UserPatch, String> {
    service
        .update_user(command.id, command.draft)
        .await
        .map_err(|e| format!("{e:#}"))
}

pub async fn delete_user(
    service: Arc<dyn UserAdminService>,
    command: DeleteCommand,
) -> Result<(), String> {
    service
        .delete_user(command.id)
        .await
        .map_err(|e| format!("{e:#}"))
}
