//! Employ desktop client library
//!
//! Application glue, domains and infrastructure used by the `employ` binary
//! in `src/main.rs`. The library is exposed so integration tests can drive
//! the update handlers directly.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod update;
pub mod view;
