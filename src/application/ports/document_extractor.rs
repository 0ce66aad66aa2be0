use async_trait::async_trait;

use crate::domain::ExtractionResult;

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, data: &[u8]) -> Result<ExtractionResult, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("corrupt document: {0}")]
    Corrupt(String),
    #[error("temporary file error: {0}")]
    Io(String),
}
