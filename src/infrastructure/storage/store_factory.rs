use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ObjectStorage, StorageError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::cos_store::CosObjectStorage;
use super::local_store::LocalObjectStorage;

pub struct ObjectStorageFactory;

impl ObjectStorageFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn ObjectStorage>, StorageError> {
        match settings.provider {
            StorageProviderSetting::Cos => {
                tracing::info!(region = %settings.region, "Using COS object storage");
                Ok(Arc::new(CosObjectStorage::new(
                    settings.region.clone(),
                    settings.endpoint_template.clone(),
                )))
            }
            StorageProviderSetting::Local => {
                tracing::info!(path = %settings.local_path, "Using local object storage");
                let store = LocalObjectStorage::new(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
        }
    }
}
