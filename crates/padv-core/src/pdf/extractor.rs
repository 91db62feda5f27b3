//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{DocumentText, Result};
use crate::error::PdfError;

/// Decodes text from the leading pages of a payment advice PDF.
///
/// The document handle lives inside this value; dropping the extractor
/// releases it on every exit path.
pub struct PdfTextExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfTextExtractor {
    /// Create a new extractor with no document loaded.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Get the number of pages in the loaded PDF.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Decode text from at most the first `max_pages` pages, in page
    /// order. Falls back to whole-document extraction when the per-page
    /// decode yields less than `min_text_length` characters.
    pub fn extract_leading_text(
        &self,
        max_pages: usize,
        min_text_length: usize,
    ) -> Result<DocumentText> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))?;

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let pages_to_read = max_pages.min(page_count) as u32;
        let mut pages = Vec::with_capacity(pages_to_read as usize);
        let mut total_len = 0;

        for page_num in 1..=pages_to_read {
            let page_text = doc.extract_text(&[page_num]).unwrap_or_default();
            total_len += page_text.len();
            pages.push(page_text);
        }

        if total_len < min_text_length {
            warn!(
                "Per-page decode produced {} chars, falling back to whole-document extraction",
                total_len
            );
            let full = pdf_extract::extract_text_from_mem(&self.raw_data)
                .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
            if full.trim().is_empty() {
                return Err(PdfError::TextExtraction(
                    "document contains no extractable text".to_string(),
                ));
            }
            return Ok(DocumentText::new(vec![full]));
        }

        debug!(
            "Extracted {} chars from {} leading pages",
            total_len, pages_to_read
        );
        Ok(DocumentText::new(pages))
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_new() {
        let extractor = PdfTextExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfTextExtractor::new();
        let result = extractor.load(b"this is not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_empty() {
        let mut extractor = PdfTextExtractor::new();
        let result = extractor.load(b"");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_extract_without_load_fails() {
        let extractor = PdfTextExtractor::new();
        let result = extractor.extract_leading_text(3, 20);
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}
