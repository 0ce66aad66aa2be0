use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::ObjectStore;
use object_store::local::LocalFileSystem;

use crate::application::ports::{ObjectStorage, StorageError};
use crate::domain::{Credentials, ResolvedLocation};

use super::error_mapping::classify;
use super::object_path;

/// Serves objects from `<base>/<bucket>/<object_key>` on the local disk.
pub struct LocalObjectStorage {
    inner: Arc<LocalFileSystem>,
}

impl LocalObjectStorage {
    pub fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::Transient(format!("failed to create {}: {e}", base_path.display()))
        })?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| StorageError::Transient(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait]
impl ObjectStorage for LocalObjectStorage {
    #[tracing::instrument(
        skip(self, credentials),
        fields(bucket = %location.bucket, object_key = %location.object_key)
    )]
    async fn fetch(
        &self,
        location: &ResolvedLocation,
        credentials: &Credentials,
    ) -> Result<Bytes, StorageError> {
        if !credentials.is_complete() {
            return Err(StorageError::MissingCredentials);
        }

        let path = object_path(&format!("{}/{}", location.bucket, location.object_key))?;
        let result = self.inner.get(&path).await.map_err(classify)?;
        result.bytes().await.map_err(classify)
    }
}
