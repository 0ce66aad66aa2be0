use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{
    CredentialSource, DocumentExtractor, ExtractionError, ObjectStorage, StorageError,
};
use crate::domain::{FileReference, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub text: String,
    pub page_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionStage {
    Validating,
    Downloading,
    Extracting,
}

impl IngestionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Downloading => "downloading",
            Self::Extracting => "extracting",
        }
    }
}

impl fmt::Display for IngestionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns a file reference into the text of the PDF it points to.
///
/// Each call runs validate, download and extract once. Nothing is cached and
/// nothing is retried.
pub struct IngestionService<S, E>
where
    S: ObjectStorage + ?Sized,
    E: DocumentExtractor + ?Sized,
{
    object_storage: Arc<S>,
    extractor: Arc<E>,
    credential_source: Arc<dyn CredentialSource>,
}

impl<S, E> IngestionService<S, E>
where
    S: ObjectStorage + ?Sized,
    E: DocumentExtractor + ?Sized,
{
    pub fn new(
        object_storage: Arc<S>,
        extractor: Arc<E>,
        credential_source: Arc<dyn CredentialSource>,
    ) -> Self {
        Self {
            object_storage,
            extractor,
            credential_source,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn parse(&self, file_id: &str) -> Result<ParsedDocument, IngestionError> {
        let location = FileReference::parse(file_id).inspect_err(|e| {
            tracing::warn!(stage = %IngestionStage::Validating, error = %e, "Rejected file reference");
        })?;

        tracing::debug!(
            environment = %location.environment,
            bucket = %location.bucket,
            object_key = %location.object_key,
            "File reference resolved"
        );

        let credentials = self
            .credential_source
            .load()
            .filter(|c| c.is_complete())
            .ok_or(StorageError::MissingCredentials)
            .inspect_err(|_| {
                tracing::warn!(stage = %IngestionStage::Downloading, "Storage credentials missing");
            })?;

        let data = self
            .object_storage
            .fetch(&location, &credentials)
            .await
            .inspect_err(|e| {
                tracing::warn!(stage = %IngestionStage::Downloading, error = %e, "Download failed");
            })?;

        tracing::debug!(bytes = data.len(), "Object downloaded");

        let extraction = self.extractor.extract(&data).await.inspect_err(|e| {
            tracing::warn!(stage = %IngestionStage::Extracting, error = %e, "Extraction failed");
        })?;

        let document = ParsedDocument {
            text: extraction.aggregated_text(),
            page_count: extraction.page_count,
        };

        tracing::info!(
            page_count = document.page_count,
            chars = document.text.len(),
            "PDF parsed"
        );

        Ok(document)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
}

impl IngestionError {
    pub fn stage(&self) -> IngestionStage {
        match self {
            Self::Validation(_) => IngestionStage::Validating,
            Self::Storage(_) => IngestionStage::Downloading,
            Self::Extraction(_) => IngestionStage::Extracting,
        }
    }
}
