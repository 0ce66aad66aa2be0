use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{Credentials, ResolvedLocation};

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Downloads the whole object. Implementations either return every byte
    /// or fail; partial bodies are never handed back.
    async fn fetch(
        &self,
        location: &ResolvedLocation,
        credentials: &Credentials,
    ) -> Result<Bytes, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("object storage credentials are not configured")]
    MissingCredentials,
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("storage temporarily unavailable: {0}")]
    Transient(String),
}
