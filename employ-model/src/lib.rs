//! Core data model definitions shared across Employ crates.
#![allow(missing_docs)]

pub mod auth;
pub mod error;
pub mod ids;
pub mod page;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, SessionToken};
pub use error::{ModelError, Result as ModelResult};
pub use ids::UserId;
pub use page::UserPage;
pub use user::{DraftField, UserDraft, UserPatch, UserRecord};
