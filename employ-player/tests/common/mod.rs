//! Mocks and fixtures shared by the player integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use employ_model::{
    LoginRequest, SessionToken, UserDraft, UserId, UserPage, UserPatch,
    UserRecord,
};
use employ_player::domains::auth::storage::{MemorySessionStore, SessionStore};
use employ_player::infra::api_client::ApiClient;
use employ_player::infra::services::{AuthService, UserAdminService};
use employ_player::state::State;

pub struct MockAuthService {
    pub token: Option<&'static str>,
    pub calls: AtomicUsize,
}

impl MockAuthService {
    pub fn accepting(token: &'static str) -> Self {
        Self {
            token: Some(token),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            token: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl AuthService for MockAuthService {
    async fn login(
        &self,
        _request: LoginRequest,
    ) -> anyhow::Result<SessionToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.token {
            Some(token) => Ok(SessionToken::new(token)?),
            None => anyhow::bail!("user not found"),
        }
    }
}

/// Counts calls and answers from canned results.
#[derive(Default)]
pub struct MockUserAdminService {
    pub pages: Vec<UserPage>,
    pub fail: bool,
    pub list_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl MockUserAdminService {
    pub fn with_pages(pages: Vec<UserPage>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl UserAdminService for MockUserAdminService {
    async fn list_users(&self, page: u32) -> anyhow::Result<UserPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("connection refused");
        }
        let index = page.saturating_sub(1) as usize;
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no page {page}"))
    }

    async fn update_user(
        &self,
        _id: UserId,
        draft: UserDraft,
    ) -> anyhow::Result<UserPatch> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("server error");
        }
        Ok(UserPatch {
            updated_at: Some("2024-01-01T00:00:00.000Z".into()),
            ..UserPatch::from(draft)
        })
    }

    async fn delete_user(&self, _id: UserId) -> anyhow::Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("server error");
        }
        Ok(())
    }
}

pub fn ann() -> UserRecord {
    UserRecord::new(1, "Ann", "Lee", "ann@x.com")
}

pub fn bob() -> UserRecord {
    UserRecord::new(2, "Bob", "Lee", "bob@x.com")
}

pub fn cara() -> UserRecord {
    UserRecord::new(3, "Cara", "Diaz", "cara@y.com")
}

pub fn first_page() -> UserPage {
    UserPage::new(vec![ann(), bob(), cara()], 2)
}

pub fn state_with(
    auth: Arc<dyn AuthService>,
    admin: Arc<dyn UserAdminService>,
    store: Arc<dyn SessionStore>,
) -> State {
    let client =
        Arc::new(ApiClient::new("https://reqres.in/api").expect("client"));
    State::new(client, auth, admin, store)
}

pub fn default_state() -> State {
    state_with(
        Arc::new(MockAuthService::accepting("token-123")),
        Arc::new(MockUserAdminService::with_pages(vec![first_page()])),
        Arc::new(MemorySessionStore::new()),
    )
}

/// State on the roster screen with the first page loaded.
pub fn loaded_state() -> State {
    loaded_state_with(Arc::new(MockUserAdminService::with_pages(vec![
        first_page(),
    ])))
}

/// Like [`loaded_state`], with a caller-owned admin service.
pub fn loaded_state_with(admin: Arc<dyn UserAdminService>) -> State {
    let mut state = state_with(
        Arc::new(MockAuthService::accepting("token-123")),
        admin,
        Arc::new(MemorySessionStore::new()),
    );
    state.screen = employ_player::state::Screen::Roster;
    let roster = &mut state.domains.user_management.roster;
    let ticket = roster.begin_fetch();
    roster.finish_fetch(ticket, Ok(first_page()));
    state
}
