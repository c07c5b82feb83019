use crate::config::OcrConfig;
use crate::error::Result;
use crate::models::ExtractedContent;
use crate::ocr::{preprocess_image, OcrProvider};

use super::TextExtractor;

pub struct ImageExtractor;

impl ImageExtractor {
    /// OCR a scanned resume.
    ///
    /// The recognized text is routed through the plain-text normalization
    /// path so image and text-bearing inputs converge on one record shape.
    pub async fn extract(
        bytes: &[u8],
        ocr: &OcrProvider,
        config: &OcrConfig,
    ) -> Result<ExtractedContent> {
        let processed = preprocess_image(bytes, config)?;
        let text = ocr.ocr(&processed).await?;

        Ok(TextExtractor::from_text(text))
    }
}
