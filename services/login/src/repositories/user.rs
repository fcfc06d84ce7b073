//! User repository for the login lookup

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::{
    models::UserRecord,
    store::{StoreResult, UserStore},
};

/// User repository
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    /// Match on username only; no role filter is applied
    async fn find_by_username(&self, username: &str) -> StoreResult<Vec<UserRecord>> {
        debug!("Looking up user rows for: {}", username);

        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password, role, is_reseller
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
