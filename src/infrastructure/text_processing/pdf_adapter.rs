use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::ExtractionResult;

/// Page-wise PDF text extraction backed by `pdf_oxide`.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractionError::Corrupt(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ExtractionError::Corrupt(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = match doc.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => text,
                Ok(_) => String::new(),
                Err(e) => {
                    // A broken page must not sink the rest of the document.
                    tracing::warn!(page = page_index + 1, error = %e, "Skipping unreadable page");
                    String::new()
                }
            };
            pages.push(text);
        }

        Ok(ExtractionResult::new(pages))
    }
}

#[async_trait]
impl DocumentExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            tracing::error!(error = %e, "Failed to create temp file for PDF extraction");
            ExtractionError::Io(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            tracing::error!(error = %e, "Failed to write PDF bytes to temp file");
            ExtractionError::Io(format!("failed to write temp file: {e}"))
        })?;

        // The temp file is removed when it drops, after the blocking task ends.
        let result = tokio::task::spawn_blocking(move || Self::extract_pages(temp_file.path()))
            .await
            .map_err(|e| ExtractionError::Corrupt(format!("task join error: {e}")))??;

        let empty_pages = result.pages.iter().filter(|p| p.is_empty()).count();
        tracing::info!(
            page_count = result.page_count,
            empty_pages,
            "PDF text extraction complete"
        );

        Ok(result)
    }
}
