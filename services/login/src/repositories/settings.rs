//! Site settings read from the `settings` table

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::store::{SettingsLookup, StoreResult};

#[derive(Clone)]
pub struct PgSettings {
    pool: PgPool,
}

impl PgSettings {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsLookup for PgSettings {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT setting_value
            FROM settings
            WHERE setting_key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.and_then(|row| row.get::<Option<String>, _>("setting_value")))
    }
}
