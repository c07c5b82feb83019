use crate::error::{EtlError, Result};
use crate::models::ExtractedContent;

pub struct TextExtractor;

impl TextExtractor {
    /// Read UTF-8 text bytes as a single segment.
    pub fn extract(bytes: &[u8]) -> Result<ExtractedContent> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| EtlError::Processing(format!("Unreadable text encoding: {e}")))?;

        Ok(Self::from_text(text.to_string()))
    }

    /// Normalize already-decoded text.
    ///
    /// This is the convergence path for OCR output: image files end up with
    /// the same record shape as text-bearing files. Plain text carries no
    /// pagination, so the page count is 1.
    pub fn from_text(text: String) -> ExtractedContent {
        ExtractedContent {
            text,
            page_count: 1,
        }
    }
}
