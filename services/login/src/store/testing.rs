//! Test doubles for the user store, session store and settings lookup

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use super::{MemorySessionStore, SessionStore, SettingsLookup, StoreError, StoreResult, UserStore};
use crate::models::{Session, SessionId, UserRecord};

/// User table held in memory
///
/// Counts lookups and can be switched into a failing state so callers can be
/// checked for query counts and backend error handling.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<Vec<UserRecord>>>,
    queries: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl MemoryUserStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            ..Self::default()
        }
    }

    /// Number of lookups served so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Make every following lookup fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Vec<UserRecord>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("user store offline".to_string()));
        }

        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|user| user.username == username)
            .cloned()
            .collect())
    }
}

/// [`MemorySessionStore`] that counts writes and can be switched into a
/// failing state
#[derive(Debug, Clone)]
pub struct TestSessionStore {
    inner: MemorySessionStore,
    writes: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl TestSessionStore {
    pub fn new() -> Self {
        Self {
            inner: MemorySessionStore::new(Duration::from_secs(60)),
            writes: Arc::default(),
            failing: Arc::default(),
        }
    }

    /// Number of `set` calls served so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }

    /// Make every following operation fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("session store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for TestSessionStore {
    async fn get(&self, id: &SessionId) -> StoreResult<Option<Session>> {
        self.check()?;
        self.inner.get(id).await
    }

    async fn set(&self, id: &SessionId, session: &Session) -> StoreResult<()> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(id, session).await
    }

    async fn destroy(&self, id: &SessionId) -> StoreResult<()> {
        self.check()?;
        self.inner.destroy(id).await
    }
}

/// Fixed settings map, optionally failing every lookup
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
    failing: Arc<AtomicBool>,
}

impl MemorySettings {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            failing: Arc::default(),
        }
    }

    /// Make every following lookup fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl SettingsLookup for MemorySettings {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("settings offline".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str) -> UserRecord {
        UserRecord {
            id,
            username: username.to_string(),
            password_hash: String::new(),
            role: "admin".to_string(),
            is_reseller: false,
        }
    }

    #[tokio::test]
    async fn test_user_lookup_returns_every_match() {
        let store = MemoryUserStore::new(vec![user(1, "admin"), user(2, "admin"), user(3, "bob")]);

        let rows = store.find_by_username("admin").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(store.find_by_username("ghost").await.unwrap().is_empty());
        assert_eq!(store.query_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_user_store_still_counts_the_query() {
        let store = MemoryUserStore::default();
        store.set_failing(true);

        assert!(matches!(
            store.find_by_username("admin").await,
            Err(StoreError::Unavailable(_))
        ));
        assert_eq!(store.query_count(), 1);
    }

    #[tokio::test]
    async fn test_settings_lookup() {
        let settings = MemorySettings::new([("site_name", "Portal")]);
        assert_eq!(
            settings.get_setting("site_name").await.unwrap(),
            Some("Portal".to_string())
        );
        assert_eq!(settings.get_setting("site_icon").await.unwrap(), None);

        settings.set_failing(true);
        assert!(settings.get_setting("site_name").await.is_err());
    }

    #[tokio::test]
    async fn test_failing_session_store_rejects_every_operation() {
        let store = TestSessionStore::new();
        let id = SessionId::generate();
        store.set_failing(true);

        assert!(store.get(&id).await.is_err());
        assert!(store.set(&id, &Session::for_user(&user(1, "admin"))).await.is_err());
        assert!(store.destroy(&id).await.is_err());
        assert_eq!(store.write_count(), 0);
    }
}
