//! Collaborator seams of the login service
//!
//! The authenticator and the routes only see these traits. Postgres and Redis
//! adapters live in `repositories` and `session`. [`MemorySessionStore`]
//! backs the `memory` session backend.

use async_trait::async_trait;
use common::error::CacheError;
use thiserror::Error;

use crate::models::{Session, SessionId, UserRecord};

pub mod memory;
#[cfg(test)]
pub mod testing;

pub use memory::MemorySessionStore;
#[cfg(test)]
pub use testing::{MemorySettings, MemoryUserStore, TestSessionStore};

/// Failure of an external store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("stored session is unreadable: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows whose username equals `username`
    ///
    /// Exactly one parameterized query per call. Matching follows the
    /// store's collation.
    async fn find_by_username(&self, username: &str) -> StoreResult<Vec<UserRecord>>;
}

/// Client-scoped session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &SessionId) -> StoreResult<Option<Session>>;

    async fn set(&self, id: &SessionId, session: &Session) -> StoreResult<()>;

    async fn destroy(&self, id: &SessionId) -> StoreResult<()>;
}

/// Site settings such as `site_name` and `site_icon`
#[async_trait]
pub trait SettingsLookup: Send + Sync {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>>;
}

/// User-facing message lookup
pub trait Translator: Send + Sync {
    /// Message for `key`, or the key itself when the catalog has no entry
    fn translate(&self, key: &str) -> String;
}
