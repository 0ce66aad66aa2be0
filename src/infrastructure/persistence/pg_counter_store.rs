use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{CounterStore, RepositoryError};

const COUNTER_ID: i32 = 1;

pub struct PgCounterStore {
    pool: PgPool,
}

impl PgCounterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterStore for PgCounterStore {
    #[instrument(skip(self))]
    async fn increment(&self) -> Result<i64, RepositoryError> {
        let now = Utc::now();

        let count: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO counters (id, count, created_at, updated_at)
            VALUES ($1, 1, $2, $2)
            ON CONFLICT (id) DO UPDATE
            SET count = counters.count + 1, updated_at = EXCLUDED.updated_at
            RETURNING count
            "#,
        )
        .bind(COUNTER_ID)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(i64::from(count))
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM counters WHERE id = $1")
            .bind(COUNTER_ID)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn read(&self) -> Result<i64, RepositoryError> {
        let count: Option<i32> = sqlx::query_scalar("SELECT count FROM counters WHERE id = $1")
            .bind(COUNTER_ID)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(count.map(i64::from).unwrap_or(0))
    }
}
