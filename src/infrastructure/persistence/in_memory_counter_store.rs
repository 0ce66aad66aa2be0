use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{CounterStore, RepositoryError};

/// Process-local counter used when no database is configured.
#[derive(Default)]
pub struct InMemoryCounterStore {
    count: Mutex<Option<i64>>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn increment(&self) -> Result<i64, RepositoryError> {
        let mut count = self.count.lock().await;
        let next = count.map_or(1, |c| c + 1);
        *count = Some(next);
        Ok(next)
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        *self.count.lock().await = None;
        Ok(())
    }

    async fn read(&self) -> Result<i64, RepositoryError> {
        Ok(self.count.lock().await.unwrap_or(0))
    }
}
