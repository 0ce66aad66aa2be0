use async_trait::async_trait;
use bytes::Bytes;
use object_store::{ObjectStore, RetryConfig};
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path as StorePath;

use crate::application::ports::{ObjectStorage, StorageError};
use crate::domain::{Credentials, ResolvedLocation};

use super::error_mapping::classify;
use super::object_path;

pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://{bucket}.cos.{region}.myqcloud.com";

/// Tencent COS accessed through its S3-compatible API.
///
/// The bucket is only known per request, so a client is built for every fetch.
pub struct CosObjectStorage {
    region: String,
    endpoint_template: String,
}

impl CosObjectStorage {
    pub fn new(region: impl Into<String>, endpoint_template: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_template: endpoint_template.into(),
        }
    }

    pub fn endpoint_for(&self, bucket: &str) -> String {
        self.endpoint_template
            .replace("{bucket}", bucket)
            .replace("{region}", &self.region)
    }

    /// Plain `http://` templates are honoured, e.g. for a local S3 emulator.
    pub fn allows_http(&self) -> bool {
        self.endpoint_template.starts_with("http://")
    }

    fn client(&self, bucket: &str, credentials: &Credentials) -> Result<AmazonS3, StorageError> {
        // Retries are left to callers: one request per fetch.
        let retry = RetryConfig {
            max_retries: 0,
            ..Default::default()
        };

        AmazonS3Builder::new()
            .with_bucket_name(bucket)
            .with_region(&self.region)
            .with_endpoint(self.endpoint_for(bucket))
            .with_virtual_hosted_style_request(true)
            .with_allow_http(self.allows_http())
            .with_retry(retry)
            .with_access_key_id(&credentials.id)
            .with_secret_access_key(&credentials.secret)
            .build()
            .map_err(|e| StorageError::Transient(format!("failed to build COS client: {e}")))
    }
}

#[async_trait]
impl ObjectStorage for CosObjectStorage {
    #[tracing::instrument(
        skip(self, credentials),
        fields(bucket = %location.bucket, object_key = %location.object_key, region = %self.region)
    )]
    async fn fetch(
        &self,
        location: &ResolvedLocation,
        credentials: &Credentials,
    ) -> Result<Bytes, StorageError> {
        if !credentials.is_complete() {
            return Err(StorageError::MissingCredentials);
        }

        let client = self.client(&location.bucket, credentials)?;
        let path: StorePath = object_path(&location.object_key)?;

        let result = client.get(&path).await.map_err(classify)?;
        let bytes = result.bytes().await.map_err(classify)?;

        tracing::debug!(bytes = bytes.len(), "COS object downloaded");
        Ok(bytes)
    }
}
