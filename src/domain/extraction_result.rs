const PAGE_SEPARATOR: &str = "\n\n";

/// Per-page text of a document. Pages without text hold an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResult {
    pub pages: Vec<String>,
    pub page_count: usize,
}

impl ExtractionResult {
    pub fn new(pages: Vec<String>) -> Self {
        let page_count = pages.len();
        Self { pages, page_count }
    }

    /// Non-empty pages joined by a blank line, in document order.
    pub fn aggregated_text(&self) -> String {
        self.pages
            .iter()
            .filter(|page| !page.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR)
    }
}
