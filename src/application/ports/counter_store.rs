use async_trait::async_trait;

use super::RepositoryError;

/// Single persisted counter row. Concurrent writers resolve as last write wins.
#[async_trait]
pub trait CounterStore: Send + Sync {
    async fn increment(&self) -> Result<i64, RepositoryError>;

    async fn clear(&self) -> Result<(), RepositoryError>;

    async fn read(&self) -> Result<i64, RepositoryError>;
}
