use crate::error::{EtlError, Result};
use crate::extract::PAGE_DELIMITER;
use crate::models::ExtractedContent;

pub struct PdfExtractor;

impl PdfExtractor {
    /// Decode a PDF, joining per-page text with the page delimiter.
    ///
    /// The page count comes from the decoder's pagination; a PDF that decodes
    /// to zero pages still reports 1 so the invariant `page_count >= 1` holds.
    pub fn extract(bytes: &[u8]) -> Result<ExtractedContent> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| EtlError::Processing(format!("PDF extraction failed: {e}")))?;

        let page_count = pages.len().max(1) as i32;
        let text = pages.join(PAGE_DELIMITER);

        Ok(ExtractedContent { text, page_count })
    }
}
